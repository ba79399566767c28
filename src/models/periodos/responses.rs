use serde::Serialize;

use super::entities::Periodo;

#[derive(Debug, Serialize)]
pub struct PeriodoListResponse {
    pub items: Vec<Periodo>,
}
