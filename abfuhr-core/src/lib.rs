//! Core types and service wiring for the abfuhr waste schedule API.

/// In-memory, time-bounded store for extracted schedules.
pub mod cache;
/// Domain models and identifiers shared by all providers.
pub mod model;
/// Bundle of ports and the municipality registry for one upstream source.
pub mod plugin;
/// Traits describing the provider interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use cache::*;
pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
