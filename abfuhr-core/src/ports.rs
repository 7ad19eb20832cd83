//! Traits describing provider capabilities and the errors they surface.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{MunicipalityId, Schedule};

#[derive(thiserror::Error, Debug)]
/// Errors raised while downloading a municipality page.
pub enum FetchError {
    /// Upstream answered with a non-success status code.
    #[error("Failed to fetch page: {0}")]
    Status(u16),
    /// Network layer failed, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Errors raised while extracting a schedule from a downloaded page.
pub enum ExtractError {
    /// The content region holding all entries is missing from the page.
    #[error("No div with id '{0}' found on the page.")]
    RegionNotFound(String),
}

#[derive(thiserror::Error, Debug)]
/// Errors surfaced to callers of the service.
pub enum ServiceError {
    /// The municipality name is not in the registry.
    #[error("Invalid gemeinde: '{0}'")]
    UnknownMunicipality(String),
    /// Upstream could not be reached or rejected the request.
    #[error(transparent)]
    FetchFailed(#[from] FetchError),
    /// The downloaded page did not have the expected shape.
    #[error(transparent)]
    ExtractionFailed(#[from] ExtractError),
}

#[async_trait]
/// Trait for provider-specific page download backends.
pub trait PagePort: Send + Sync {
    /// Download the raw HTML page for a municipality.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure or a non-success status.
    async fn fetch(&self, id: &MunicipalityId) -> Result<String, FetchError>;
}

/// Trait for provider-specific page parsers.
pub trait ExtractPort: Send + Sync {
    /// Turn a downloaded page into a schedule.
    ///
    /// Malformed individual entries are skipped, not reported.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::RegionNotFound`] when the page does not contain
    /// the expected content region.
    fn extract(&self, html: &str) -> Result<Schedule, ExtractError>;
}
