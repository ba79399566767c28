use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    carreras::responses::CarreraListResponse,
};
use crate::services::{acting_plantel, authenticated_user};

use super::CarreraService;

pub async fn handle_list_carreras(
    service: &CarreraService,
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

    match storage.list_carreras(plantel_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CarreraListResponse { items },
            "Programs retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Program listing failed: {e}"),
            )),
        ),
    }
}
