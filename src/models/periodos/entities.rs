use serde::{Deserialize, Serialize};

// Academic term. No uniqueness is enforced; "activo" is a soft filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Periodo {
    pub id: i64,
    pub nombre: String,
    pub fecha_inicio: Option<i64>,
    pub fecha_fin: Option<i64>,
    pub activo: bool,
}
