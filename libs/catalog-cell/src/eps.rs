use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use shared_http::ApiClient;
use shared_models::{ApiResult, Eps};

pub struct EpsClient {
    api: Arc<ApiClient>,
}

impl EpsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Eps>> {
        self.api
            .request(Method::GET, "/eps", None, "Error al cargar EPS")
            .await
    }

    pub async fn get(&self, eps_id: i64) -> ApiResult<Eps> {
        let path = format!("/eps/{}", eps_id);
        self.api
            .request(Method::GET, &path, None, "Error al cargar EPS")
            .await
    }

    pub async fn create(&self, nombre: &str) -> ApiResult<Eps> {
        let body = json!({ "nombre": nombre });
        self.api
            .request(Method::POST, "/eps", Some(body), "Error al crear EPS")
            .await
    }

    pub async fn update(&self, eps_id: i64, nombre: &str) -> ApiResult<Eps> {
        let path = format!("/eps/{}", eps_id);
        let body = json!({ "nombre": nombre });
        self.api
            .request(Method::PUT, &path, Some(body), "Error al actualizar EPS")
            .await
    }

    pub async fn delete(&self, eps_id: i64) -> ApiResult<()> {
        let path = format!("/eps/{}", eps_id);
        let _: Value = self
            .api
            .request(Method::DELETE, &path, None, "Error al eliminar EPS")
            .await?;
        Ok(())
    }
}
