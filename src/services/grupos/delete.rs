use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};
use crate::services::{acting_plantel, authenticated_user};

use super::GrupoService;

pub async fn handle_delete_grupo(
    service: &GrupoService,
    grupo_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let plantel_id = match acting_plantel(&user) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.delete_grupo_scoped(grupo_id, plantel_id).await {
        Ok(true) => {
            tracing::info!("Group {} deleted", grupo_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Group deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GrupoNotFound,
            "Grupo not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Group deletion failed: {e}"),
            )),
        ),
    }
}
