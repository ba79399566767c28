use serde::Serialize;

use super::entities::Calificacion;

#[derive(Debug, Serialize)]
pub struct CalificacionListResponse {
    pub items: Vec<Calificacion>,
    pub promedio: f64,
}
