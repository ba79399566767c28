use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    asignaturas::{
        requests::{CreateAsignaturaRequest, NewAsignatura},
        responses::ReplicacionResponse,
    },
    planteles::entities::NivelEducativo,
};
use crate::services::{acting_plantel, authenticated_user, validate_docentes};
use crate::utils::validate::validate_grado;

use super::AsignaturaService;

/// Subject creation fans out into one row per campus group matching
/// (grado_destino, nivel_academico). Zero matching groups is not an error;
/// the caller learns nothing was replicated.
pub async fn handle_create_asignatura(
    service: &AsignaturaService,
    create_request: CreateAsignaturaRequest,
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
            "Subject name is required",
        )));
    }
    if let Err(msg) = validate_grado(create_request.grado_destino) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Err(resp) = validate_docentes(&storage, plantel_id, &create_request.docente_ids).await {
        return Ok(resp);
    }

    // Credits only exist in the university tier
    let plantel = match storage.get_plantel_by_id(plantel_id).await {
        Ok(Some(plantel)) => plantel,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PlantelNotFound,
                "Campus not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Campus lookup failed: {e}"),
                )),
            );
        }
    };
    let creditos = match plantel.nivel_educativo {
        NivelEducativo::Superior => create_request.creditos,
        NivelEducativo::Basica => None,
    };

    let grado_destino = create_request.grado_destino;
    let new_asignatura = NewAsignatura {
        nombre: create_request.nombre,
        clave: create_request.clave,
        creditos,
        seriacion_id: create_request.seriacion_id,
        grado_destino,
        nivel_academico: create_request.nivel_academico,
        docente_ids: create_request.docente_ids,
    };

    match storage.replicate_asignatura(plantel_id, new_asignatura).await {
        Ok(created) => {
            tracing::info!("Subject replicated into {} groups", created);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReplicacionResponse {
                    created,
                    grado_destino,
                },
                "Subject created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AsignaturaCreationFailed,
                format!("Subject creation failed: {e}"),
            )),
        ),
    }
}
