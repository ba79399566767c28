use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    asistencias::{requests::AsistenciaListParams, responses::AsistenciaListResponse},
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::fechas::{month_range, parse_month_range};

use super::AsistenciaService;

pub async fn handle_list_asistencias(
    service: &AsistenciaService,
    params: AsistenciaListParams,
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

    match storage.get_grupo_scoped(params.grupo_id, plantel_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GrupoNotFound,
                "Grupo not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Grupo lookup failed: {e}"),
                )),
            );
        }
    }

    let (desde, hasta) = match params.mes {
        Some(ref mes) => match parse_month_range(mes) {
            Ok(range) => range,
            Err(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "mes must be YYYY-MM",
                )));
            }
        },
        None => month_range(chrono::Utc::now()),
    };

    match storage.list_asistencias(params.grupo_id, desde, hasta).await {
        Ok(items) => {
            let total = items.len() as i64;
            let presentes = items.iter().filter(|a| a.presente).count() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AsistenciaListResponse {
                    items,
                    presentes,
                    total,
                },
                "Attendance retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Attendance listing failed: {e}"),
            )),
        ),
    }
}
