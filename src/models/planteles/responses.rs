use serde::Serialize;

use super::entities::Plantel;
use super::theme::CampusTheme;

#[derive(Debug, Serialize)]
pub struct PlantelResponse {
    pub plantel: Plantel,
    pub theme: CampusTheme,
}

#[derive(Debug, Serialize)]
pub struct PlantelListResponse {
    pub items: Vec<Plantel>,
}

#[derive(Debug, Serialize)]
pub struct AulasActualizadasResponse {
    pub total_aulas: i32,
    pub aulas_ocupadas: i64,
    pub aulas_disponibles: i64,
}
