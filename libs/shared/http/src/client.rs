use std::sync::Arc;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use shared_config::ApiConfig;
use shared_models::{ApiError, ApiResult};

use crate::normalize::extract_error_message;
use crate::token::TokenStore;

/// Authenticated HTTP wrapper over the platform REST API.
///
/// Every request re-reads the token store and attaches
/// `Authorization: Bearer <token>` when a token is present; absence of a
/// token is not an error, the request goes out unauthenticated and the
/// server decides. One request per call, no retry, no timeout tuning.
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            store,
        }
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = self.store.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Stored token is not a valid header value, sending unauthenticated"),
            }
        }

        headers
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        fallback: &str,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.request_with_query(method, path, &[], body, fallback).await
    }

    pub async fn request_with_query<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        fallback: &str,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self.client.request(method, &url).headers(self.headers());

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await.map_err(|e| {
            error!("Connection error for {}: {}", url, e);
            ApiError::Connection(fallback.to_string())
        })?;

        Self::decode(response, fallback).await
    }

    /// Multipart POST, used by the profile photo upload. The form supplies
    /// its own content type; only the bearer header is attached here.
    pub async fn post_multipart<T>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        fallback: &str,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Uploading multipart form to {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Connection error for {}: {}", url, e);
                ApiError::Connection(fallback.to_string())
            })?;

        Self::decode(response, fallback).await
    }

    async fn decode<T>(response: reqwest::Response, fallback: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message = extract_error_message(&body, fallback);
            error!("API error ({}): {}", status, message);
            return Err(ApiError::Server(message));
        }

        let text = response
            .text()
            .await
            .map_err(|_| ApiError::Server(fallback.to_string()))?;

        // Some endpoints (DELETE, logout) answer 2xx with an empty body
        let payload = if text.trim().is_empty() { "null" } else { text.as_str() };

        serde_json::from_str(payload).map_err(|e| {
            error!("Failed to decode {} response: {}", status, e);
            ApiError::Server(fallback.to_string())
        })
    }
}
