use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePeriodoRequest {
    pub nombre: String,
    /// `YYYY-MM-DD`
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub activo: bool,
}

// Storage-level payload, dates already parsed to epoch seconds
#[derive(Debug, Clone)]
pub struct NewPeriodo {
    pub nombre: String,
    pub fecha_inicio: Option<i64>,
    pub fecha_fin: Option<i64>,
    pub activo: bool,
}

#[derive(Debug, Deserialize)]
pub struct PeriodoListParams {
    pub activo: Option<bool>,
}
