use std::sync::Arc;

use anyhow::{bail, Context};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod dashboard;

use auth_cell::AuthClient;
use shared_config::ApiConfig;
use shared_http::{ApiClient, FileTokenStore, TokenStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CitaSalud client");

    let config = ApiConfig::from_env();
    let store = Arc::new(FileTokenStore::new(config.session_file.clone()));

    let mut args = std::env::args().skip(1);
    let email = match args.next() {
        Some(email) => email,
        None => match store.remembered_email() {
            Some(email) => {
                info!("Using remembered email {}", email);
                email
            }
            None => bail!("usage: citasalud-cli <email> <password> [--remember]"),
        },
    };
    let password = args
        .next()
        .context("usage: citasalud-cli <email> <password> [--remember]")?;
    let remember = args.any(|arg| arg == "--remember");

    let api = Arc::new(ApiClient::new(&config, store));
    let auth = AuthClient::new(Arc::clone(&api));

    let user = auth.login(&email, &password, remember).await?;
    info!("Sesión iniciada: {} ({})", user.name, user.role);

    dashboard::show(api, &user).await?;

    Ok(())
}
