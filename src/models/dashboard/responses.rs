use serde::Serialize;

use crate::models::grupos::responses::AlumnoEnRiesgo;
use crate::models::periodos::entities::Periodo;
use crate::models::planteles::theme::CampusTheme;

// Synthesized agenda entry. "hora" carries either a priority tag (URGENTE,
// ATENCIÓN, LOGÍSTICA) or a clock time for the routine filler item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgendaItem {
    pub hora: String,
    pub evento: String,
    pub tipo: AgendaTipo,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AgendaTipo {
    Alerta,
    Aviso,
    Rutina,
}

#[derive(Debug, Serialize)]
pub struct AulasReales {
    pub ocupadas: i64,
    pub total: i32,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_docentes: i64,
    pub total_coordinadores: i64,
    pub total_alumnos: i64,
    /// "NN%" over today's records, "Sin registros" when none exist.
    pub asistencia_global: String,
    pub aulas_reales: AulasReales,
    pub en_riesgo_total: i64,
    pub alumnos_riesgo: Vec<AlumnoEnRiesgo>,
    /// Teachers owning at least one subject with no grade recorded yet.
    pub docentes_pendientes: i64,
    pub agenda: Vec<AgendaItem>,
    pub periodos: Vec<Periodo>,
    pub theme: CampusTheme,
}
