use serde::{Deserialize, Serialize};

// Subject taught within one group. Credits carry meaning only on SUPERIOR
// campuses; normalized to None elsewhere at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asignatura {
    pub id: i64,
    pub grupo_id: i64,
    pub carrera_id: i64,
    pub nombre: String,
    pub clave: Option<String>,
    pub creditos: Option<i32>,
    /// Prerequisite subject (seriación), self-reference.
    pub seriacion_id: Option<i64>,
}
