use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    planteles::{requests::ActualizarAulasRequest, responses::AulasActualizadasResponse},
};
use crate::services::{acting_plantel, authenticated_user};

use super::PlantelService;

/// Classroom capacity update. A reduction below the number of groups
/// currently occupying classrooms is rejected so no group is left without
/// a room on paper.
pub async fn handle_actualizar_aulas(
    service: &PlantelService,
    aulas_request: ActualizarAulasRequest,
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

    if aulas_request.total_aulas < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "total_aulas must be zero or greater",
        )));
    }

    let ocupadas = match storage.count_grupos(plantel_id).await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Classroom update failed: {e}"),
                )),
            );
        }
    };

    if (aulas_request.total_aulas as i64) < ocupadas {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AulasReductionRejected,
            format!("{ocupadas} classrooms are occupied; cannot reduce below that"),
        )));
    }

    match storage
        .update_total_aulas(plantel_id, aulas_request.total_aulas)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AulasActualizadasResponse {
                total_aulas: aulas_request.total_aulas,
                aulas_ocupadas: ocupadas,
                aulas_disponibles: (aulas_request.total_aulas as i64 - ocupadas).max(0),
            },
            "Classrooms updated successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlantelNotFound,
            "Campus not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Classroom update failed: {e}"),
            )),
        ),
    }
}
