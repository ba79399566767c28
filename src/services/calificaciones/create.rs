use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    calificaciones::requests::{CreateCalificacionRequest, NewCalificacion},
    users::entities::UserRole,
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::fechas::parse_fecha;
use crate::utils::validate::validate_nota;

use super::CalificacionService;

pub async fn handle_create_calificacion(
    service: &CalificacionService,
    create_request: CreateCalificacionRequest,
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

    if let Err(msg) = validate_nota(create_request.nota) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::NotaOutOfRange, msg)));
    }

    // Both student and subject must live in the acting campus
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
    match storage
        .get_asignatura_scoped(create_request.asignatura_id, plantel_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AsignaturaNotFound,
                "Asignatura not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Asignatura lookup failed: {e}"),
                )),
            );
        }
    }

    let fecha = match create_request.fecha {
        Some(ref fecha) => match parse_fecha(fecha) {
            Ok(ts) => ts,
            Err(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "fecha must be YYYY-MM-DD",
                )));
            }
        },
        None => chrono::Utc::now().timestamp(),
    };

    let new_calificacion = NewCalificacion {
        alumno_id: create_request.alumno_id,
        asignatura_id: create_request.asignatura_id,
        nota: create_request.nota,
        fecha,
    };

    match storage.create_calificacion(new_calificacion).await {
        Ok(calificacion) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            calificacion,
            "Grade recorded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::CalificacionCreationFailed,
                format!("Grade recording failed: {e}"),
            )),
        ),
    }
}
