use serde::Serialize;

use super::entities::Carrera;

#[derive(Debug, Serialize)]
pub struct CarreraListResponse {
    pub items: Vec<Carrera>,
}
