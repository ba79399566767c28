pub mod asignaturas;
pub mod asistencias;
pub mod auth;
pub mod calificaciones;
pub mod carreras;
pub mod dashboard;
pub mod grupos;
pub mod periodos;
pub mod planteles;
pub mod system;
pub mod tutores;
pub mod users;

pub use asignaturas::AsignaturaService;
pub use asistencias::AsistenciaService;
pub use auth::AuthService;
pub use calificaciones::CalificacionService;
pub use carreras::CarreraService;
pub use dashboard::DashboardService;
pub use grupos::GrupoService;
pub use periodos::PeriodoService;
pub use planteles::PlantelService;
pub use system::SystemService;
pub use tutores::TutorService;
pub use users::UserService;

use actix_web::{HttpRequest, HttpResponse};

use crate::middlewares::RequireJWT;
use crate::models::users::entities::{UserRole, Usuario};
use crate::models::{ApiResponse, ErrorCode};

/// Authenticated user placed in the extensions by `RequireJWT`.
pub(crate) fn authenticated_user(request: &HttpRequest) -> Result<Usuario, HttpResponse> {
    RequireJWT::extract_user(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))
    })
}

/// Campus the acting user operates in. ADMIN carries no campus of its own,
/// so campus-scoped endpoints answer it the same way they answer an id from
/// another campus: not found.
pub(crate) fn acting_plantel(user: &Usuario) -> Result<i64, HttpResponse> {
    user.plantel_id.ok_or_else(|| {
        HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlantelNotFound,
            "Campus not found",
        ))
    })
}

/// Verifies every id in `docente_ids` is an active DOCENTE of the campus.
pub(crate) async fn validate_docentes(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    plantel_id: i64,
    docente_ids: &[i64],
) -> Result<(), HttpResponse> {
    for docente_id in docente_ids {
        match storage.get_user_scoped(*docente_id, plantel_id).await {
            Ok(Some(user)) if user.rol == UserRole::Docente => {}
            Ok(_) => {
                return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    format!("Docente {docente_id} not found"),
                )));
            }
            Err(e) => {
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Docente lookup failed: {e}"),
                    )),
                );
            }
        }
    }
    Ok(())
}
