use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    asignaturas::responses::{
        AsignaturaConGrupo, AsignaturaGrupoPorCarrera, AsignaturaListResponse,
    },
    planteles::theme::CampusTheme,
};
use crate::services::{acting_plantel, authenticated_user};

use super::AsignaturaService;

/// Subject catalog of the campus, grouped per program.
pub async fn handle_list_asignaturas(
    service: &AsignaturaService,
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

    let rows = match storage.list_asignaturas_catalog(plantel_id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Subject listing failed: {e}"),
                )),
            );
        }
    };

    let mut por_carrera: BTreeMap<(String, i64), Vec<AsignaturaConGrupo>> = BTreeMap::new();
    for row in rows {
        por_carrera
            .entry((row.carrera_nombre.clone(), row.carrera_id))
            .or_default()
            .push(AsignaturaConGrupo {
                asignatura: row.asignatura,
                grupo_nombre: row.grupo_nombre,
                grado: row.grado,
            });
    }

    let plantel = storage.get_plantel_by_id(plantel_id).await.ok().flatten();
    let theme = CampusTheme::resolve(plantel.as_ref());

    let response = AsignaturaListResponse {
        carreras: por_carrera
            .into_iter()
            .map(
                |((carrera_nombre, carrera_id), asignaturas)| AsignaturaGrupoPorCarrera {
                    carrera_id,
                    carrera_nombre,
                    asignaturas,
                },
            )
            .collect(),
        theme,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Subjects retrieved successfully",
    )))
}
