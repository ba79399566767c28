use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::TimeZone;

use crate::models::{
    ApiResponse, ErrorCode,
    asistencias::requests::{CreateAsistenciaRequest, NewAsistencia},
    users::entities::UserRole,
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::fechas::{day_range, parse_fecha};

use super::AsistenciaService;

/// Records one attendance flag per student per day. A second record for the
/// same student and day is rejected instead of overwritten.
pub async fn handle_create_asistencia(
    service: &AsistenciaService,
    create_request: CreateAsistenciaRequest,
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

    match storage
        .get_grupo_scoped(create_request.grupo_id, plantel_id)
        .await
    {
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

    let day = chrono::Utc
        .timestamp_opt(fecha, 0)
        .single()
        .unwrap_or_else(chrono::Utc::now);
    let (desde, hasta) = day_range(day);

    match storage
        .exists_asistencia(create_request.alumno_id, desde, hasta)
        .await
    {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AsistenciaDuplicate,
                "Attendance already recorded for this student today",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Attendance lookup failed: {e}"),
                )),
            );
        }
    }

    let new_asistencia = NewAsistencia {
        alumno_id: create_request.alumno_id,
        grupo_id: create_request.grupo_id,
        fecha,
        presente: create_request.presente,
    };

    match storage.create_asistencia(new_asistencia).await {
        Ok(asistencia) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            asistencia,
            "Attendance recorded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AsistenciaCreationFailed,
                format!("Attendance recording failed: {e}"),
            )),
        ),
    }
}
