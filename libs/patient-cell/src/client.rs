use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_http::ApiClient;
use shared_models::{ApiResult, Cita, Doctor, Paciente};

use crate::models::PacientePayload;

pub struct PacienteClient {
    api: Arc<ApiClient>,
}

impl PacienteClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Paciente>> {
        self.api
            .request(Method::GET, "/pacientes", None, "Error al cargar pacientes")
            .await
    }

    pub async fn get(&self, paciente_id: i64) -> ApiResult<Paciente> {
        let path = format!("/pacientes/{}", paciente_id);
        self.api
            .request(Method::GET, &path, None, "Error al cargar el paciente")
            .await
    }

    pub async fn create(&self, payload: &PacientePayload) -> ApiResult<Paciente> {
        debug!("Creating paciente {}", payload.email);

        let body = json!({
            "nombre": payload.nombre,
            "email": payload.email,
            "telefono": payload.telefono,
            "eps_id": payload.eps_id,
        });

        self.api
            .request(Method::POST, "/pacientes", Some(body), "Error al crear paciente")
            .await
    }

    pub async fn update(&self, paciente_id: i64, payload: &PacientePayload) -> ApiResult<Paciente> {
        debug!("Updating paciente {}", paciente_id);

        let path = format!("/pacientes/{}", paciente_id);
        let body = json!({
            "nombre": payload.nombre,
            "email": payload.email,
            "telefono": payload.telefono,
            "eps_id": payload.eps_id,
        });

        self.api
            .request(Method::PUT, &path, Some(body), "Error al actualizar paciente")
            .await
    }

    pub async fn delete(&self, paciente_id: i64) -> ApiResult<()> {
        let path = format!("/pacientes/{}", paciente_id);
        let _: Value = self
            .api
            .request(Method::DELETE, &path, None, "Error al eliminar paciente")
            .await?;
        Ok(())
    }

    pub async fn citas(&self, paciente_id: i64) -> ApiResult<Vec<Cita>> {
        let path = format!("/pacientes/{}/citas", paciente_id);
        self.api
            .request(
                Method::GET,
                &path,
                None,
                "Error al cargar las citas del paciente",
            )
            .await
    }

    pub async fn doctores(&self, paciente_id: i64) -> ApiResult<Vec<Doctor>> {
        let path = format!("/pacientes/{}/doctores", paciente_id);
        self.api
            .request(
                Method::GET,
                &path,
                None,
                "Error al cargar los doctores del paciente",
            )
            .await
    }
}
