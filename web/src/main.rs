//! TED Tender Search
//!
//! Searches the TED procurement notice feed for a fixed keyword list within
//! one country and a trailing date window, and renders the notices as HTML.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{SystemClock, TedClient};
use app::SearchService;
use config::Config;
use domain::ports::{Clock, NoticeFeed};

/// Application state shared across all handlers
pub struct AppState<F, C>
where
    F: NoticeFeed,
    C: Clock,
{
    pub search_service: Arc<SearchService<F, C>>,
    pub config: Arc<Config>,
}

impl<F, C> Clone for AppState<F, C>
where
    F: NoticeFeed,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            search_service: self.search_service.clone(),
            config: self.config.clone(),
        }
    }
}

/// Single page: GET shows the form, POST runs the search
pub fn build_router<F, C>(state: AppState<F, C>) -> Router
where
    F: NoticeFeed + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::show_form::<F, C>).post(handlers::run_search::<F, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tedscan_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TED tender search...");

    // Load configuration
    let config = Arc::new(Config::from_env());
    tracing::info!(
        "Searching {} keywords in {} over the last {} days",
        config.keywords.len(),
        config.country_code,
        config.lookback_days
    );

    // Create adapters
    let ted_client = Arc::new(TedClient::from_config(&config)?);
    let clock = Arc::new(SystemClock);

    // Create application services
    let search_service = Arc::new(SearchService::new(ted_client, clock, config.clone()));

    let state = AppState {
        search_service,
        config: config.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
