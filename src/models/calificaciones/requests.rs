use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCalificacionRequest {
    pub alumno_id: i64,
    pub asignatura_id: i64,
    /// 0.00 to 10.00
    pub nota: f64,
    /// `YYYY-MM-DD`; defaults to today.
    pub fecha: Option<String>,
}

// Storage-level payload, fecha parsed to epoch seconds
#[derive(Debug, Clone)]
pub struct NewCalificacion {
    pub alumno_id: i64,
    pub asignatura_id: i64,
    pub nota: f64,
    pub fecha: i64,
}

#[derive(Debug, Deserialize)]
pub struct CalificacionListParams {
    pub alumno_id: Option<i64>,
    pub asignatura_id: Option<i64>,
}
