use std::env;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub session_file: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let config = Self {
            base_url: env::var("CITASALUD_API_URL")
                .unwrap_or_else(|_| {
                    warn!("CITASALUD_API_URL not set, using default");
                    "http://localhost:8000/api".to_string()
                }),
            session_file: env::var("CITASALUD_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("CITASALUD_SESSION_FILE not set, using default");
                    PathBuf::from("citasalud_session.json")
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            session_file: PathBuf::from("citasalud_session.json"),
        }
    }
}
