use serde::Serialize;

use super::entities::Asistencia;

#[derive(Debug, Serialize)]
pub struct AsistenciaListResponse {
    pub items: Vec<Asistencia>,
    pub presentes: i64,
    pub total: i64,
}
