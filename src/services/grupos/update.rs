use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    grupos::requests::{UpdateGrupoData, UpdateGrupoRequest},
};
use crate::services::{acting_plantel, authenticated_user, validate_docentes};
use crate::utils::validate::{validate_capacidad, validate_grado};

use super::GrupoService;

pub async fn handle_update_grupo(
    service: &GrupoService,
    grupo_id: i64,
    update_request: UpdateGrupoRequest,
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

    if let Some(grado) = update_request.grado
        && let Err(msg) = validate_grado(grado)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if let Some(capacidad) = update_request.capacidad_maxima
        && let Err(msg) = validate_capacidad(capacidad)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Some(carrera_id) = update_request.carrera_id {
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
    if let Some(periodo_id) = update_request.periodo_id {
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

    if let Some(ref docente_ids) = update_request.docente_ids
        && let Err(resp) = validate_docentes(&storage, plantel_id, docente_ids).await
    {
        return Ok(resp);
    }

    let update = UpdateGrupoData {
        nombre: update_request.nombre,
        grado: update_request.grado,
        carrera_id: update_request.carrera_id.map(Some),
        periodo_id: update_request.periodo_id.map(Some),
        aula: update_request.aula.map(Some),
        capacidad_maxima: update_request.capacidad_maxima,
        docente_ids: update_request.docente_ids,
    };

    match storage.update_grupo_scoped(grupo_id, plantel_id, update).await {
        Ok(Some(grupo)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grupo,
            "Group updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GrupoNotFound,
            "Grupo not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Group update failed: {e}"),
            )),
        ),
    }
}
