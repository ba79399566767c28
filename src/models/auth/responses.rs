use serde::Serialize;

use crate::models::planteles::theme::CampusTheme;
use crate::models::users::entities::Usuario;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub usuario: Usuario,
    /// Superusers land on the admin surface instead of the campus shell.
    pub redirect_admin: bool,
    /// Campus theme bundle so the renderer can brand the shell immediately.
    pub theme: CampusTheme,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub usuario: Usuario,
    pub theme: CampusTheme,
}

#[derive(Debug, Serialize)]
pub struct FotoPerfilResponse {
    pub foto_perfil: String,
}
