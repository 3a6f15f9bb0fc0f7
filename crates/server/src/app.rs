//! # Application
//!
//! Shared state, router assembly and the server entry point.

use anyhow::{Context, Result};
use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use learning_center_core::catalog::Catalog;
use learning_center_core::session::{SessionProbe, TokenProbe};
use rust_embed::RustEmbed;
use std::{sync::Arc, time::Duration};
use tera::Tera;
use tokio::net::TcpListener;

use crate::api;
use crate::config::ServerConfig;
use crate::pages;

/// Embedded page templates
#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

/// Embedded stylesheets and images
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Application state
pub struct AppState {
    /// Immutable course catalog, loaded once at startup
    pub catalog: Arc<Catalog>,
    pub templates: Tera,
    pub session_probe: Arc<dyn SessionProbe>,
    pub showcase_period: Duration,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(catalog: Catalog, config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            catalog: Arc::new(catalog),
            templates: load_templates()?,
            session_probe: Arc::new(TokenProbe::new(config.session_delay)),
            showcase_period: config.showcase_period,
        })
    }
}

/// Build a Tera instance from the embedded templates
pub fn load_templates() -> Result<Tera> {
    let mut sources = Vec::new();
    for name in Templates::iter() {
        let file = Templates::get(&name)
            .with_context(|| format!("Embedded template vanished: {}", name))?;
        let source = String::from_utf8(file.data.into_owned())
            .with_context(|| format!("Template is not UTF-8: {}", name))?;
        sources.push((name.to_string(), source));
    }

    let mut tera = Tera::default();
    tera.register_filter("thousands", pages::thousands);
    tera.add_raw_templates(sources)
        .context("Failed to compile page templates")?;
    tracing::debug!(count = tera.get_template_names().count(), "Templates loaded");
    Ok(tera)
}

async fn serve_asset(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches("/assets/");

    match Assets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Assemble pages, API and assets into one router
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .merge(pages::page_routes())
        .nest("/api/v1", api::api_routes())
        .route("/assets/*path", get(serve_asset))
        .fallback(pages::not_found)
        .with_state(state)
}

// === Server Entry ===

pub async fn run_server(config: ServerConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    tracing::info!(courses = catalog.len(), "Catalog loaded");

    let state: SharedState = Arc::new(AppState::new(catalog, &config)?);
    let app = build_router(state);

    let addr = config.addr();
    tracing::info!("Learning Center running at http://{}", addr);
    tracing::info!("   Pages: /, /courses, /course/:id, /about, /contact, /login");
    tracing::info!("   API:   /api/v1/courses, /api/v1/facets, /api/v1/showcase/events");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Router over the bundled catalog with no session delay
    pub fn router() -> Router {
        let catalog = Catalog::embedded().unwrap();
        let state = AppState::new(catalog, &ServerConfig::default()).unwrap();
        build_router(Arc::new(state))
    }
}
