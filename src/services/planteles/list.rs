use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    planteles::responses::PlantelListResponse,
};

use super::PlantelService;

pub async fn handle_list_planteles(
    service: &PlantelService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_planteles().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PlantelListResponse { items },
            "Campuses retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Campus listing failed: {e}"),
            )),
        ),
    }
}
