use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use shared_http::ApiClient;
use shared_models::{ApiResult, Especialidad};

pub struct EspecialidadClient {
    api: Arc<ApiClient>,
}

impl EspecialidadClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Especialidad>> {
        self.api
            .request(
                Method::GET,
                "/especialidades",
                None,
                "Error al cargar especialidades",
            )
            .await
    }

    pub async fn get(&self, especialidad_id: i64) -> ApiResult<Especialidad> {
        let path = format!("/especialidades/{}", especialidad_id);
        self.api
            .request(Method::GET, &path, None, "Error al cargar especialidades")
            .await
    }

    pub async fn create(&self, nombre: &str) -> ApiResult<Especialidad> {
        let body = json!({ "nombre": nombre });
        self.api
            .request(
                Method::POST,
                "/especialidades",
                Some(body),
                "Error al crear especialidad",
            )
            .await
    }

    pub async fn update(&self, especialidad_id: i64, nombre: &str) -> ApiResult<Especialidad> {
        let path = format!("/especialidades/{}", especialidad_id);
        let body = json!({ "nombre": nombre });
        self.api
            .request(
                Method::PUT,
                &path,
                Some(body),
                "Error al actualizar especialidad",
            )
            .await
    }

    pub async fn delete(&self, especialidad_id: i64) -> ApiResult<()> {
        let path = format!("/especialidades/{}", especialidad_id);
        let _: Value = self
            .api
            .request(
                Method::DELETE,
                &path,
                None,
                "Error al eliminar especialidad",
            )
            .await?;
        Ok(())
    }
}
