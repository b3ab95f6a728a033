use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_http::ApiClient;
use shared_models::{ApiResult, User};

use crate::models::UserPayload;

/// Admin-only user management.
pub struct UsersClient {
    api: Arc<ApiClient>,
}

impl UsersClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<User>> {
        self.api
            .request(Method::GET, "/users", None, "Error al cargar usuarios")
            .await
    }

    pub async fn create(&self, payload: &UserPayload) -> ApiResult<User> {
        debug!("Creating user {}", payload.email);

        let body = json!({
            "name": payload.name,
            "email": payload.email,
            "role": payload.role,
            "password": payload.password,
        });

        self.api
            .request(Method::POST, "/users", Some(body), "Error al crear usuario")
            .await
    }

    pub async fn update(&self, user_id: i64, payload: &UserPayload) -> ApiResult<User> {
        debug!("Updating user {}", user_id);

        let path = format!("/users/{}", user_id);
        let body = json!({
            "name": payload.name,
            "email": payload.email,
            "role": payload.role,
            "password": payload.password,
        });

        self.api
            .request(Method::PUT, &path, Some(body), "Error al actualizar usuario")
            .await
    }

    pub async fn delete(&self, user_id: i64) -> ApiResult<()> {
        let path = format!("/users/{}", user_id);
        let _: Value = self
            .api
            .request(Method::DELETE, &path, None, "Error al eliminar usuario")
            .await?;
        Ok(())
    }
}
