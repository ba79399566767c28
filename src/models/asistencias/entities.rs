use serde::{Deserialize, Serialize};

// Daily attendance flag; one row per student per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asistencia {
    pub id: i64,
    pub alumno_id: i64,
    pub grupo_id: i64,
    pub fecha: i64,
    pub presente: bool,
}
