//! High-level service facade combining registry, cache, and ports.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::ScheduleCache;
use crate::model::Schedule;
use crate::plugin::{MunicipalityRegistry, SourcePlugin};
use crate::ports::{ExtractPort, PagePort, ServiceError};

/// Public entry point for looking up municipality schedules.
///
/// Results are cached per display name. Only fully successful extractions are
/// cached; every failure leaves the cache untouched and nothing is retried.
pub struct AbfuhrService {
    registry: MunicipalityRegistry,
    page_port: Arc<dyn PagePort>,
    extract_port: Arc<dyn ExtractPort>,
    cache: ScheduleCache,
}

impl AbfuhrService {
    /// Create a new service bound to the provided source and cache.
    #[must_use]
    pub fn new(plugin: SourcePlugin, cache: ScheduleCache) -> Self {
        Self {
            registry: plugin.registry,
            page_port: plugin.page_port,
            extract_port: plugin.extract_port,
            cache,
        }
    }

    /// List all municipality display names, sorted.
    #[must_use]
    pub fn municipalities(&self) -> Vec<String> {
        self.registry.names().map(str::to_owned).collect()
    }

    /// Current schedule for a municipality, from cache when possible.
    ///
    /// Concurrent misses for the same name each fetch on their own; the last
    /// successful one wins the cache slot.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownMunicipality`] for names missing from the
    /// registry, [`ServiceError::FetchFailed`] when the download fails, and
    /// [`ServiceError::ExtractionFailed`] when the page has an unexpected shape.
    pub async fn schedule_for(&self, name: &str) -> Result<Schedule, ServiceError> {
        if let Some(cached) = self.cache.get(name).await {
            debug!(municipality = name, "serving schedule from cache");
            return Ok(cached);
        }

        let id = self
            .registry
            .resolve(name)
            .ok_or_else(|| ServiceError::UnknownMunicipality(name.to_owned()))?;

        debug!(municipality = name, %id, "cache miss, fetching page");
        let html = self.page_port.fetch(id).await.inspect_err(|err| {
            warn!(municipality = name, %id, error = %err, "page fetch failed");
        })?;

        let schedule = self.extract_port.extract(&html).inspect_err(|err| {
            warn!(municipality = name, %id, error = %err, "page extraction failed");
        })?;

        debug!(
            municipality = name,
            events = schedule.events.len(),
            "caching extracted schedule"
        );
        self.cache.insert(name.to_owned(), schedule.clone()).await;
        Ok(schedule)
    }

    /// Drop all cached schedules. Called once at shutdown.
    pub async fn shutdown(&self) {
        self.cache.drain().await;
    }
}
