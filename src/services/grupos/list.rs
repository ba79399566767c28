use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    carreras::entities::Carrera,
    grupos::responses::{AulasInfo, GrupoConKpis, GrupoListResponse, GrupoSeccion, seccion_titulo},
    planteles::{entities::NivelEducativo, theme::CampusTheme},
};
use crate::services::{acting_plantel, authenticated_user};

use super::{GrupoService, kpis_for_grupo};

/// Campus group overview. SUPERIOR campuses section the list per program,
/// BASICA ones per academic level; each group carries its KPI block, and
/// the classroom occupancy summary rides along.
pub async fn handle_list_grupos(
    service: &GrupoService,
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

    let grupos = match storage.list_grupos(plantel_id).await {
        Ok(grupos) => grupos,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Group listing failed: {e}"),
                )),
            );
        }
    };

    let carreras = match storage.list_carreras(plantel_id).await {
        Ok(carreras) => carreras,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Program listing failed: {e}"),
                )),
            );
        }
    };
    let carreras_por_id: std::collections::HashMap<i64, Carrera> =
        carreras.into_iter().map(|c| (c.id, c)).collect();

    let superior = plantel.nivel_educativo == NivelEducativo::Superior;
    let mut secciones: BTreeMap<String, Vec<GrupoConKpis>> = BTreeMap::new();

    for grupo in grupos {
        let kpis = match kpis_for_grupo(&storage, &grupo).await {
            Ok(kpis) => kpis,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("KPI aggregation failed: {e}"),
                    )),
                );
            }
        };
        let docentes = storage
            .list_docentes_for_grupo(grupo.id)
            .await
            .unwrap_or_default();

        let carrera = grupo.carrera_id.and_then(|id| carreras_por_id.get(&id));
        let titulo = seccion_titulo(superior, carrera);

        secciones.entry(titulo).or_default().push(GrupoConKpis {
            grupo,
            kpis,
            docentes,
        });
    }

    let ocupadas = storage.count_grupos(plantel_id).await.unwrap_or(0);
    let aulas = AulasInfo::calcular(plantel.total_aulas, ocupadas);

    let theme = CampusTheme::resolve(Some(&plantel));

    let response = GrupoListResponse {
        secciones: secciones
            .into_iter()
            .map(|(titulo, grupos)| GrupoSeccion { titulo, grupos })
            .collect(),
        aulas,
        theme,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Groups retrieved successfully",
    )))
}
