use serde::{Deserialize, Serialize};

/// Create/update body for `/pacientes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacientePayload {
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub eps_id: i64,
}
