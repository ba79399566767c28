use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    tutores::responses::TutorListResponse,
    users::entities::UserRole,
};
use crate::services::{acting_plantel, authenticated_user};

use super::TutorService;

pub async fn handle_list_tutores(
    service: &TutorService,
    alumno_id: i64,
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

    match storage.get_user_scoped(alumno_id, plantel_id).await {
        Ok(Some(alumno)) if alumno.rol == UserRole::Alumno => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Alumno not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Alumno lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.list_tutores_by_alumno(alumno_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TutorListResponse { items },
            "Guardians retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Guardian listing failed: {e}"),
            )),
        ),
    }
}
