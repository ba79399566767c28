use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    planteles::{requests::CreatePlantelRequest, responses::PlantelResponse, theme::CampusTheme},
};
use crate::utils::validate::validate_capacidad;

use super::PlantelService;

pub async fn handle_create_plantel(
    service: &PlantelService,
    create_request: CreatePlantelRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if create_request.nombre.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Campus name is required",
        )));
    }
    if let Some(total_aulas) = create_request.total_aulas
        && let Err(msg) = validate_capacidad(total_aulas)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.create_plantel(create_request).await {
        Ok(plantel) => {
            tracing::info!("Campus {} created", plantel.nombre);
            let theme = CampusTheme::resolve(Some(&plantel));
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PlantelResponse { plantel, theme },
                "Campus created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Campus creation failed: {e}"),
            )),
        ),
    }
}
