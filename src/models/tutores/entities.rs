use serde::{Deserialize, Serialize};

// Guardian contact record, attached only to ALUMNO users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutor {
    pub id: i64,
    pub alumno_id: i64,
    pub nombre: String,
    /// Relationship label, e.g. "Madre", "Padre", "Abuelo".
    pub parentesco: String,
    pub telefono: String,
    pub correo: Option<String>,
}
