#![recursion_limit = "256"]

mod config;
mod routes;

use std::path::Path;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable environment file"),
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "consciousness-watch stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    log_document(&config.public_dir).await;

    let app = routes::app(&config).map_err(ServerError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(addr = %config.addr, public_dir = %config.public_dir.display(), "consciousness-watch listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Log what the dashboard will show. The file is served as-is either way.
async fn log_document(public_dir: &Path) {
    let path = public_dir.join(client::net::api::DOCUMENT_PATH.trim_start_matches('/'));
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "rubric document missing; the page will stay on its loading view");
            return;
        }
    };
    match rubric::Document::from_json(&raw) {
        Ok(doc) => tracing::info!(
            title = doc.name.resolve(rubric::Language::En),
            version = %doc.version,
            levels = doc.levels.len(),
            papers = doc.paper_count(),
            "rubric document ready"
        ),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "rubric document does not parse"),
    }
}
