use serde::Deserialize;

use crate::models::carreras::entities::NivelAcademico;

// Fan-out creation: the subject is replicated into every group of the
// acting campus matching (grado_destino, nivel_academico).
#[derive(Debug, Deserialize)]
pub struct CreateAsignaturaRequest {
    pub nombre: String,
    pub clave: Option<String>,
    pub creditos: Option<i32>,
    pub seriacion_id: Option<i64>,
    pub grado_destino: i32,
    pub nivel_academico: NivelAcademico,
    #[serde(default)]
    pub docente_ids: Vec<i64>,
}

// Storage-level payload; credits already normalized for the campus tier and
// teachers validated as campus-scoped DOCENTE users.
#[derive(Debug, Clone)]
pub struct NewAsignatura {
    pub nombre: String,
    pub clave: Option<String>,
    pub creditos: Option<i32>,
    pub seriacion_id: Option<i64>,
    pub grado_destino: i32,
    pub nivel_academico: NivelAcademico,
    pub docente_ids: Vec<i64>,
}
