use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username (matrícula) or email.
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// Own-profile update; password change requires the current password.
#[derive(Debug, Deserialize)]
pub struct UpdatePerfilRequest {
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub password_actual: Option<String>,
    pub password_nueva: Option<String>,
}
