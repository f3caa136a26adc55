mod catalog;
mod config;
mod errors;
mod models;
mod report;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::report::enhancer::{HttpReportEnhancer, ReportEnhancer};
use crate::routes::build_router;
use crate::scoring::alignment::KeywordTextAligner;
use crate::scoring::ScoringConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Compass v{}", env!("CARGO_PKG_VERSION"));

    // Catalog is the only hard dependency; refuse to start without it
    let catalog = CareerCatalog::from_json_file(&config.catalog_path)?;

    // Text aligner (keyword table from file, or the built-in one)
    let aligner = match &config.keywords_path {
        Some(path) => KeywordTextAligner::from_json_file(path)?,
        None => KeywordTextAligner::builtin(),
    };
    info!("Text aligner ready ({} keyword groups)", aligner.len());

    // Optional narrative enhancer
    let enhancer: Option<Arc<dyn ReportEnhancer>> = match &config.enhancer_url {
        Some(url) => {
            let timeout = Duration::from_millis(config.enhancer_timeout_ms);
            info!("Narrative enhancer enabled: {url}");
            Some(Arc::new(HttpReportEnhancer::new(url.clone(), timeout)?))
        }
        None => {
            info!("Narrative enhancer disabled (ENHANCER_URL not set)");
            None
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        scoring: Arc::new(ScoringConfig::default()),
        aligner: Arc::new(aligner),
        enhancer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
