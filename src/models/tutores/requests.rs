use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTutorRequest {
    pub alumno_id: i64,
    pub nombre: String,
    pub parentesco: String,
    pub telefono: String,
    pub correo: Option<String>,
}
