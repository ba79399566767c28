use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    grupos::{
        kpi::alertas_para_grupo,
        requests::GrupoDetailParams,
        responses::{AlumnoEnRiesgo, GrupoDetailResponse},
    },
    planteles::theme::CampusTheme,
};
use crate::services::{acting_plantel, authenticated_user};

use super::{GrupoService, kpis_for_grupo};

const RIESGO_MUESTRA: u64 = 5;

pub async fn handle_get_grupo(
    service: &GrupoService,
    grupo_id: i64,
    params: GrupoDetailParams,
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

    let grupo = match storage.get_grupo_scoped(grupo_id, plantel_id).await {
        Ok(Some(grupo)) => grupo,
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
                    format!("Group lookup failed: {e}"),
                )),
            );
        }
    };

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

    let mut alumnos = match storage.list_alumnos_by_grupo(grupo.id).await {
        Ok(alumnos) => alumnos,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student listing failed: {e}"),
                )),
            );
        }
    };

    // Optional name/matrícula search within the roster
    if let Some(ref q) = params.q
        && !q.trim().is_empty()
    {
        let needle = q.trim().to_lowercase();
        alumnos.retain(|a| {
            a.username.to_lowercase().contains(&needle)
                || a.nombre_completo().to_lowercase().contains(&needle)
                || a.email.to_lowercase().contains(&needle)
        });
    }

    let en_riesgo_total = storage
        .count_alumnos_en_riesgo(plantel_id, Some(grupo.id))
        .await
        .unwrap_or(0);
    let en_riesgo: Vec<AlumnoEnRiesgo> = storage
        .list_alumnos_en_riesgo(plantel_id, Some(grupo.id), RIESGO_MUESTRA)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|(usuario, peor_nota)| AlumnoEnRiesgo { usuario, peor_nota })
        .collect();

    let asignaturas = storage
        .count_asignaturas_for_grupo(grupo.id)
        .await
        .unwrap_or(0);
    let alertas = alertas_para_grupo(
        kpis.alumnos_inscritos,
        grupo.capacidad_maxima,
        en_riesgo_total,
        asignaturas,
    );

    let plantel = storage.get_plantel_by_id(plantel_id).await.ok().flatten();
    let theme = CampusTheme::resolve(plantel.as_ref());

    let response = GrupoDetailResponse {
        grupo,
        kpis,
        docentes,
        alumnos,
        en_riesgo_total,
        en_riesgo,
        alertas,
        theme,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Group retrieved successfully",
    )))
}
