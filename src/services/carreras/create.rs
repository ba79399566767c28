use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    carreras::requests::CreateCarreraRequest,
};
use crate::services::{acting_plantel, authenticated_user};

use super::CarreraService;

pub async fn handle_create_carrera(
    service: &CarreraService,
    create_request: CreateCarreraRequest,
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
            "Program name is required",
        )));
    }

    match storage.create_carrera(plantel_id, create_request).await {
        Ok(carrera) => {
            tracing::info!("Program {} created", carrera.nombre);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                carrera,
                "Program created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Program creation failed: {e}"),
            )),
        ),
    }
}
