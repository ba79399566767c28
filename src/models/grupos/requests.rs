use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateGrupoRequest {
    pub nombre: String,
    pub grado: i32,
    pub carrera_id: Option<i64>,
    pub periodo_id: Option<i64>,
    pub aula: Option<String>,
    pub capacidad_maxima: Option<i32>,
    /// `YYYY-MM-DD`
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    /// Campus-scoped DOCENTE users assigned to the group.
    #[serde(default)]
    pub docente_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGrupoRequest {
    pub nombre: Option<String>,
    pub grado: Option<i32>,
    pub carrera_id: Option<i64>,
    pub periodo_id: Option<i64>,
    pub aula: Option<String>,
    pub capacidad_maxima: Option<i32>,
    pub docente_ids: Option<Vec<i64>>,
}

// Storage-level payload, dates parsed and teachers validated by the service
#[derive(Debug, Clone)]
pub struct NewGrupo {
    pub nombre: String,
    pub grado: i32,
    pub carrera_id: Option<i64>,
    pub periodo_id: Option<i64>,
    pub aula: Option<String>,
    pub capacidad_maxima: i32,
    pub fecha_inicio: Option<i64>,
    pub fecha_fin: Option<i64>,
    pub docente_ids: Vec<i64>,
}

// Storage-level partial update
#[derive(Debug, Clone, Default)]
pub struct UpdateGrupoData {
    pub nombre: Option<String>,
    pub grado: Option<i32>,
    pub carrera_id: Option<Option<i64>>,
    pub periodo_id: Option<Option<i64>>,
    pub aula: Option<Option<String>>,
    pub capacidad_maxima: Option<i32>,
    pub docente_ids: Option<Vec<i64>>,
}

// Student search within the group detail view
#[derive(Debug, Deserialize)]
pub struct GrupoDetailParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromocionRequest {
    /// Target period every promoted group is reassigned to.
    pub periodo_id: i64,
}
