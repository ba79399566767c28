use serde::{Deserialize, Serialize};

// Class/section. Occupancy is advisory: capacity is never enforced as a hard
// cap at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grupo {
    pub id: i64,
    pub plantel_id: i64,
    pub carrera_id: Option<i64>,
    pub periodo_id: Option<i64>,
    pub nombre: String,
    pub grado: i32,
    pub aula: Option<String>,
    pub capacidad_maxima: i32,
    pub fecha_inicio: Option<i64>,
    pub fecha_fin: Option<i64>,
    pub created_at: i64,
}
