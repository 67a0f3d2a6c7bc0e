mod background;
mod config;
mod contact;
mod errors;
mod models;
mod routes;
mod state;
mod timer;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::dispatch::EmailJsClient;
use crate::models::profile::Profile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let mailer = EmailJsClient::new(config.emailjs_api_url.clone(), config.emailjs.clone())?;
    if mailer.is_configured() {
        info!("EmailJS client initialized");
    } else {
        warn!("EMAILJS_* variables not set; contact submissions will fail");
    }

    if !config.cv_path.exists() {
        warn!(
            "CV file {} not found; /api/download-cv will return 500",
            config.cv_path.display()
        );
    }

    let state = AppState {
        config: config.clone(),
        profile: Profile::owner(),
        mailer: Arc::new(mailer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
