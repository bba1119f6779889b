//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page is rendered by Leptos SSR and hydrated in the browser.
//! Everything else is static: the WASM bundle under `/pkg` and the JSON data
//! files served from the public directory as the fallback service.

pub mod hosts;


use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::{Method, StatusCode};
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full application: Leptos SSR page, `/pkg` assets, and the public files.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    let router = Router::new()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(static_routes(config));
    Ok(with_layers(router, config))
}

/// Health check plus the public directory as the fallback service.
fn static_routes(config: &ServerConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(public_files(config))
}

fn public_files(config: &ServerConfig) -> ServeDir {
    ServeDir::new(&config.public_dir)
}

fn with_layers(router: Router, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD]);
    let policy = Arc::new(config.allowed_hosts.clone());

    router
        .layer(middleware::from_fn_with_state(policy, hosts::enforce))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
