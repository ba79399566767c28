use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    grupos::{requests::PromocionRequest, responses::PromocionResponse},
};
use crate::services::{acting_plantel, authenticated_user};

use super::GrupoService;

/// End-of-cycle promotion: every campus group in a promotable grade moves
/// up one grade, gets reassigned to the target period, and has its dates
/// shifted a year forward. One transaction; all groups move or none do.
pub async fn handle_promote_grupos(
    service: &GrupoService,
    promocion: PromocionRequest,
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

    // The target period must exist before anything moves
    match storage.get_periodo_by_id(promocion.periodo_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PeriodoNotFound,
                "Period not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Period lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.promote_grupos(plantel_id, promocion.periodo_id).await {
        Ok(grupos_promovidos) => {
            tracing::info!(
                "Promoted {} groups to period {}",
                grupos_promovidos,
                promocion.periodo_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PromocionResponse {
                    grupos_promovidos,
                    periodo_id: promocion.periodo_id,
                },
                "Groups promoted successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::PromotionFailed,
                format!("Promotion failed: {e}"),
            )),
        ),
    }
}
