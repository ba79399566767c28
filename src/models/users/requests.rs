use serde::Deserialize;

use super::entities::Estatus;
use crate::models::common::pagination::PaginationQuery;

// Staff listing query (docentes / coordinadores)
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub estatus: Option<Estatus>,
    pub search: Option<String>,
}

// Teacher registration (DIRECTOR/COORD)
#[derive(Debug, Deserialize)]
pub struct CreateDocenteRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub telefono: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDocenteRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub telefono: Option<String>,
    pub estatus: Option<Estatus>,
}

// Coordinator registration (DIRECTOR only)
#[derive(Debug, Deserialize)]
pub struct CreateCoordinadorRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub telefono: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

// Storage-level creation payload; the service hashes the password and
// resolves role, campus and status before this reaches storage.
#[derive(Debug, Clone)]
pub struct NewUsuario {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub rol: super::entities::UserRole,
    pub estatus: Estatus,
    pub plantel_id: Option<i64>,
    pub grupo_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<i64>,
}

// Storage-level partial update
#[derive(Debug, Clone, Default)]
pub struct UpdateUsuarioData {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub estatus: Option<Estatus>,
    pub grupo_id: Option<Option<i64>>,
}

// Student registration. The password is not part of the request: every new
// student gets the fixed temporary password from configuration and estatus
// PENDIENTE until the first change.
#[derive(Debug, Deserialize)]
pub struct RegistrarAlumnoRequest {
    /// Matrícula; doubles as the login username.
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub grupo_id: i64,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    /// `YYYY-MM-DD`
    pub fecha_nacimiento: Option<String>,
}
