use serde::Deserialize;

use super::entities::NivelEducativo;

#[derive(Debug, Deserialize)]
pub struct CreatePlantelRequest {
    pub nombre: String,
    pub direccion: Option<String>,
    pub nivel_educativo: NivelEducativo,
    pub color_tema: Option<String>,
    pub logo_url: Option<String>,
    pub total_aulas: Option<i32>,
}

// ADMIN creates the campus director in the same flow as the campus itself.
#[derive(Debug, Deserialize)]
pub struct CreateDirectorRequest {
    pub plantel_id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ActualizarAulasRequest {
    pub total_aulas: i32,
}
