//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the identity-client endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. The compiled WASM bundle
//! and stylesheet are served from `/pkg`.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigSummary;
use crate::state::AppState;

/// Identity-client endpoints consumed by the browser app.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/callback", get(auth::callback))
        .route("/api/auth/signin-url", get(auth::signin_url))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/attributes", get(auth::attributes))
        .route("/api/auth/tokens", get(auth::tokens))
        .route("/api/auth/signout", post(auth::signout))
        .route("/api/config", get(config_summary))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR page + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

/// `GET /api/config` — diagnostic summary of the identity configuration.
async fn config_summary(State(state): State<AppState>) -> Json<ConfigSummary> {
    Json(state.config.summary())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
