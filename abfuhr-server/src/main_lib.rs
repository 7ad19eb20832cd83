use std::sync::Arc;

use abfuhr_core::{cache::ScheduleCache, service::AbfuhrService};
use abfuhr_provider_korneuburg as korneuburg;
use reqwest::Client;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, LogFormat};

/// Shared state handed to every handler.
pub struct AppState {
    /// Cached schedule lookups.
    pub service: AbfuhrService,
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Wire the HTTP client, provider, and cache into the application state.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = Client::builder().timeout(config.fetch_timeout).build()?;
    let plugin = korneuburg::plugin(client, config.base_url.clone());
    let service = AbfuhrService::new(plugin, ScheduleCache::new(config.cache));

    tracing::info!(
        base_url = %config.base_url,
        capacity = config.cache.capacity,
        ttl_secs = config.cache.ttl.as_secs(),
        "schedule service ready"
    );
    Ok(Arc::new(AppState { service }))
}
