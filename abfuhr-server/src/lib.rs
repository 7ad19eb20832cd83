//! HTTP service exposing cached waste collection schedules as JSON.

/// HTTP routes.
pub mod api;
/// Environment configuration.
pub mod config;
/// Error responses.
pub mod error;
mod main_lib;

pub use main_lib::{AppState, build_state, init_tracing};
