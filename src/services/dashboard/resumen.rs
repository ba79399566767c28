use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    dashboard::responses::{AgendaItem, AgendaTipo, AulasReales, DashboardResponse},
    grupos::responses::AlumnoEnRiesgo,
    planteles::theme::CampusTheme,
    users::entities::UserRole,
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::fechas::day_range;

use super::DashboardService;

const RIESGO_MUESTRA: u64 = 5;

/// Director dashboard: headcounts, today's attendance, classroom pressure,
/// academic risk, and a synthesized agenda for the day.
pub async fn handle_resumen(
    service: &DashboardService,
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

    let total_docentes = storage
        .count_users_by_rol(plantel_id, UserRole::Docente)
        .await
        .unwrap_or(0);
    let total_coordinadores = storage
        .count_users_by_rol(plantel_id, UserRole::Coord)
        .await
        .unwrap_or(0);
    let total_alumnos = storage
        .count_users_by_rol(plantel_id, UserRole::Alumno)
        .await
        .unwrap_or(0);

    // Attendance over today's records only
    let (desde, hasta) = day_range(chrono::Utc::now());
    let asistencia_global = match storage
        .asistencia_counts_for_plantel(plantel_id, desde, hasta)
        .await
    {
        Ok((_, 0)) => "Sin registros".to_string(),
        Ok((presentes, total)) => format!("{}%", presentes * 100 / total),
        Err(_) => "Sin registros".to_string(),
    };

    let ocupadas = storage.count_grupos(plantel_id).await.unwrap_or(0);
    let aulas_reales = AulasReales {
        ocupadas,
        total: plantel.total_aulas,
    };

    let en_riesgo_total = storage
        .count_alumnos_en_riesgo(plantel_id, None)
        .await
        .unwrap_or(0);
    let alumnos_riesgo: Vec<AlumnoEnRiesgo> = storage
        .list_alumnos_en_riesgo(plantel_id, None, RIESGO_MUESTRA)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|(usuario, peor_nota)| AlumnoEnRiesgo { usuario, peor_nota })
        .collect();

    let docentes_pendientes = storage
        .count_docentes_actas_pendientes(plantel_id)
        .await
        .unwrap_or(0);

    let mut agenda = Vec::new();
    if docentes_pendientes > 0 {
        agenda.push(AgendaItem {
            hora: "URGENTE".to_string(),
            evento: format!("{docentes_pendientes} docente(s) con actas pendientes de calificar"),
            tipo: AgendaTipo::Alerta,
        });
    }
    if en_riesgo_total > 0 {
        agenda.push(AgendaItem {
            hora: "ATENCIÓN".to_string(),
            evento: format!("{en_riesgo_total} alumno(s) en riesgo académico"),
            tipo: AgendaTipo::Aviso,
        });
    }
    if ocupadas >= plantel.total_aulas as i64 {
        agenda.push(AgendaItem {
            hora: "LOGÍSTICA".to_string(),
            evento: "Aulas al límite de capacidad".to_string(),
            tipo: AgendaTipo::Alerta,
        });
    }
    if agenda.is_empty() {
        agenda.push(AgendaItem {
            hora: "09:00".to_string(),
            evento: "Revisión de expedientes rutinaria".to_string(),
            tipo: AgendaTipo::Rutina,
        });
    }

    let periodos = storage.list_periodos(Some(true)).await.unwrap_or_default();
    let theme = CampusTheme::resolve(Some(&plantel));

    let response = DashboardResponse {
        total_docentes,
        total_coordinadores,
        total_alumnos,
        asistencia_global,
        aulas_reales,
        en_riesgo_total,
        alumnos_riesgo,
        docentes_pendientes,
        agenda,
        periodos,
        theme,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Dashboard retrieved successfully",
    )))
}
