use serde::Serialize;

use super::entities::Asignatura;
use crate::models::planteles::theme::CampusTheme;

// Raw catalog row from storage; the service groups rows per carrera.
#[derive(Debug, Clone)]
pub struct AsignaturaCatalogRow {
    pub asignatura: Asignatura,
    pub grupo_nombre: String,
    pub grado: i32,
    pub carrera_id: i64,
    pub carrera_nombre: String,
}

#[derive(Debug, Serialize)]
pub struct AsignaturaConGrupo {
    pub asignatura: Asignatura,
    pub grupo_nombre: String,
    pub grado: i32,
}

// Subjects listed per program, the way the catalog view renders them
#[derive(Debug, Serialize)]
pub struct AsignaturaGrupoPorCarrera {
    pub carrera_id: i64,
    pub carrera_nombre: String,
    pub asignaturas: Vec<AsignaturaConGrupo>,
}

#[derive(Debug, Serialize)]
pub struct AsignaturaListResponse {
    pub carreras: Vec<AsignaturaGrupoPorCarrera>,
    pub theme: CampusTheme,
}

#[derive(Debug, Serialize)]
pub struct ReplicacionResponse {
    /// Number of groups the subject was replicated into. Zero matches is
    /// still a success.
    pub created: u64,
    pub grado_destino: i32,
}
