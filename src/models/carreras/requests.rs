use serde::Deserialize;

use super::entities::NivelAcademico;

#[derive(Debug, Deserialize)]
pub struct CreateCarreraRequest {
    pub nombre: String,
    pub nivel: NivelAcademico,
    pub clave_rvoe: Option<String>,
}
