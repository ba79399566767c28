use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    calificaciones::{requests::CalificacionListParams, responses::CalificacionListResponse},
    grupos::kpi::promedio_general,
};

use super::CalificacionService;

pub async fn handle_list_calificaciones(
    service: &CalificacionService,
    params: CalificacionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_calificaciones(params.alumno_id, params.asignatura_id)
        .await
    {
        Ok(items) => {
            let notas: Vec<f64> = items.iter().map(|c| c.nota).collect();
            let promedio = promedio_general(&notas);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CalificacionListResponse { items, promedio },
                "Grades retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Grade listing failed: {e}"),
            )),
        ),
    }
}
