use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    tutores::requests::CreateTutorRequest,
    users::entities::UserRole,
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::validate::{validate_email, validate_telefono};

use super::TutorService;

/// Guardians are always attached to a student of the acting campus.
pub async fn handle_create_tutor(
    service: &TutorService,
    create_request: CreateTutorRequest,
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

    if create_request.nombre.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Guardian name is required",
        )));
    }
    if let Err(msg) = validate_telefono(&create_request.telefono) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if let Some(ref correo) = create_request.correo
        && let Err(msg) = validate_email(correo)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserEmailInvalid,
            msg,
        )));
    }

    match storage
        .get_user_scoped(create_request.alumno_id, plantel_id)
        .await
    {
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

    match storage.create_tutor(create_request).await {
        Ok(tutor) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            tutor,
            "Guardian created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TutorCreationFailed,
                format!("Guardian creation failed: {e}"),
            )),
        ),
    }
}
