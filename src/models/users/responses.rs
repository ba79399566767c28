use serde::Serialize;

use super::entities::Usuario;
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub usuario: Usuario,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<Usuario>,
    pub pagination: PaginationInfo,
}

// Returned from student registration; the fixed temporary password itself is
// never echoed back.
#[derive(Debug, Serialize)]
pub struct AlumnoRegistradoResponse {
    pub usuario: Usuario,
    pub temp_password_assigned: bool,
}
