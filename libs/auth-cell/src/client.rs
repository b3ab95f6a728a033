use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{info, warn};

use shared_http::ApiClient;
use shared_models::{ApiError, ApiResult, LoginResponse, TokenResponse, User};

use crate::models::{
    AdminPasswordPayload, PasswordPayload, ProfilePayload, RegisterPayload, RegisterResponse,
    ResetPasswordPayload,
};

/// Registration is the one flow where a dead connection gets its own message.
const CONNECTION_ERROR: &str = "Error de conexión. Verifica tu internet.";

pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Log in and persist the bearer token. With `remember` set the email is
    /// kept in the session store for pre-filling the login form.
    pub async fn login(&self, email: &str, password: &str, remember: bool) -> ApiResult<User> {
        let body = json!({ "email": email, "password": password });
        let response: LoginResponse = self
            .api
            .request(Method::POST, "/login", Some(body), "Error al iniciar sesión")
            .await?;

        let store = self.api.store();
        if let Err(e) = store.set_token(&response.token) {
            warn!("Could not persist session token: {}", e);
        }

        let result = if remember {
            store.set_remembered_email(email)
        } else {
            store.clear_remembered_email()
        };
        if let Err(e) = result {
            warn!("Could not update remembered email: {}", e);
        }

        info!("Logged in as {} ({})", response.user.email, response.user.role);
        Ok(response.user)
    }

    pub async fn register(&self, payload: &RegisterPayload) -> ApiResult<RegisterResponse> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let body = json!({
            "name": payload.name,
            "email": payload.email,
            "password": payload.password,
            "password_confirmation": payload.password_confirmation,
        });

        match self
            .api
            .request(Method::POST, "/register", Some(body), "Error al registrar usuario")
            .await
        {
            Err(ApiError::Connection(_)) => Err(ApiError::Connection(CONNECTION_ERROR.to_string())),
            other => other,
        }
    }

    /// The token is cleared only after the server accepts the logout, so a
    /// failed call leaves the session usable for a retry.
    pub async fn logout(&self) -> ApiResult<()> {
        let _: Value = self
            .api
            .request(Method::POST, "/logout", None, "Error al cerrar sesión")
            .await?;

        if let Err(e) = self.api.store().clear_token() {
            warn!("Could not clear session token: {}", e);
        }
        Ok(())
    }

    pub async fn refresh(&self) -> ApiResult<()> {
        let response: TokenResponse = self
            .api
            .request(Method::POST, "/refresh", None, "Error al renovar la sesión")
            .await?;

        if let Err(e) = self.api.store().set_token(&response.token) {
            warn!("Could not persist refreshed token: {}", e);
        }
        Ok(())
    }

    pub async fn me(&self) -> ApiResult<User> {
        self.api
            .request(Method::GET, "/me", None, "Error al cargar el perfil")
            .await
    }

    pub async fn update_profile(&self, payload: &ProfilePayload) -> ApiResult<User> {
        let body = json!({ "name": payload.name, "email": payload.email });
        self.api
            .request(Method::PUT, "/profile", Some(body), "Error al actualizar el perfil")
            .await
    }

    pub async fn change_password(&self, payload: &PasswordPayload) -> ApiResult<()> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let body = json!({
            "current_password": payload.current_password,
            "password": payload.password,
            "password_confirmation": payload.password_confirmation,
        });

        let _: Value = self
            .api
            .request(
                Method::PUT,
                "/profile/password",
                Some(body),
                "Error al cambiar la contraseña",
            )
            .await?;
        Ok(())
    }

    /// Upload ready image bytes as the profile photo. Picking/resizing the
    /// image is the caller's problem.
    pub async fn upload_photo(&self, bytes: Vec<u8>, filename: &str) -> ApiResult<User> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("photo", part);

        self.api
            .post_multipart("/profile/photo", form, "Error al subir la foto")
            .await
    }

    pub async fn forgot_password(&self, email: &str) -> ApiResult<()> {
        let body = json!({ "email": email });
        let _: Value = self
            .api
            .request(
                Method::POST,
                "/forgot-password",
                Some(body),
                "Error al enviar el correo de recuperación",
            )
            .await?;
        Ok(())
    }

    pub async fn reset_password(&self, payload: &ResetPasswordPayload) -> ApiResult<()> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let body = json!({
            "token": payload.token,
            "email": payload.email,
            "password": payload.password,
            "password_confirmation": payload.password_confirmation,
        });

        let _: Value = self
            .api
            .request(
                Method::POST,
                "/reset-password",
                Some(body),
                "Error al restablecer la contraseña",
            )
            .await?;
        Ok(())
    }

    pub async fn admin_set_password(
        &self,
        user_id: i64,
        payload: &AdminPasswordPayload,
    ) -> ApiResult<()> {
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let path = format!("/admin/users/{}/password", user_id);
        let body = json!({
            "password": payload.password,
            "password_confirmation": payload.password_confirmation,
        });

        let _: Value = self
            .api
            .request(
                Method::PUT,
                &path,
                Some(body),
                "Error al actualizar la contraseña del usuario",
            )
            .await?;
        Ok(())
    }
}
