pub mod asignaturas;
pub mod asistencias;
pub mod auth;
pub mod calificaciones;
pub mod carreras;
pub mod common;
pub mod dashboard;
pub mod grupos;
pub mod periodos;
pub mod planteles;
pub mod tutores;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
