use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    grupos::requests::{CreateGrupoRequest, NewGrupo},
};
use crate::services::{acting_plantel, authenticated_user, validate_docentes};
use crate::utils::fechas::parse_fecha;
use crate::utils::validate::{validate_capacidad, validate_grado};

use super::GrupoService;

const DEFAULT_CAPACIDAD: i32 = 30;

pub async fn handle_create_grupo(
    service: &GrupoService,
    create_request: CreateGrupoRequest,
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

    if create_request.nombre.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Group name is required",
        )));
    }
    if let Err(msg) = validate_grado(create_request.grado) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    let capacidad_maxima = create_request.capacidad_maxima.unwrap_or(DEFAULT_CAPACIDAD);
    if let Err(msg) = validate_capacidad(capacidad_maxima) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // Referenced program and period must exist inside the acting campus
    if let Some(carrera_id) = create_request.carrera_id {
        match storage.get_carrera_scoped(carrera_id, plantel_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CarreraNotFound,
                    "Program not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Program lookup failed: {e}"),
                    )),
                );
            }
        }
    }
    if let Some(periodo_id) = create_request.periodo_id {
        match storage.get_periodo_by_id(periodo_id).await {
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
    }

    if let Err(resp) = validate_docentes(&storage, plantel_id, &create_request.docente_ids).await {
        return Ok(resp);
    }

    let fecha_inicio = match parse_optional_fecha(create_request.fecha_inicio.as_deref()) {
        Ok(ts) => ts,
        Err(resp) => return Ok(resp),
    };
    let fecha_fin = match parse_optional_fecha(create_request.fecha_fin.as_deref()) {
        Ok(ts) => ts,
        Err(resp) => return Ok(resp),
    };

    let new_grupo = NewGrupo {
        nombre: create_request.nombre,
        grado: create_request.grado,
        carrera_id: create_request.carrera_id,
        periodo_id: create_request.periodo_id,
        aula: create_request.aula,
        capacidad_maxima,
        fecha_inicio,
        fecha_fin,
        docente_ids: create_request.docente_ids,
    };

    match storage.create_grupo(plantel_id, new_grupo).await {
        Ok(grupo) => {
            tracing::info!("Group {} created", grupo.nombre);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                grupo,
                "Group created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::GrupoCreationFailed,
                format!("Group creation failed: {e}"),
            )),
        ),
    }
}

fn parse_optional_fecha(input: Option<&str>) -> Result<Option<i64>, HttpResponse> {
    match input {
        Some(fecha) => parse_fecha(fecha).map(Some).map_err(|_| {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Dates must be YYYY-MM-DD",
            ))
        }),
        None => Ok(None),
    }
}
