use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    periodos::{requests::PeriodoListParams, responses::PeriodoListResponse},
};

use super::PeriodoService;

pub async fn handle_list_periodos(
    service: &PeriodoService,
    params: PeriodoListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_periodos(params.activo).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PeriodoListResponse { items },
            "Periods retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Period listing failed: {e}"),
            )),
        ),
    }
}
