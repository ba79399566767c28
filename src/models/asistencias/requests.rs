use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAsistenciaRequest {
    pub alumno_id: i64,
    pub grupo_id: i64,
    pub presente: bool,
    /// `YYYY-MM-DD`; defaults to today. A second record for the same
    /// student and day is rejected.
    pub fecha: Option<String>,
}

// Storage-level payload, fecha parsed to epoch seconds at midnight UTC
#[derive(Debug, Clone)]
pub struct NewAsistencia {
    pub alumno_id: i64,
    pub grupo_id: i64,
    pub fecha: i64,
    pub presente: bool,
}

#[derive(Debug, Deserialize)]
pub struct AsistenciaListParams {
    pub grupo_id: i64,
    /// `YYYY-MM`; defaults to the current month.
    pub mes: Option<String>,
}
