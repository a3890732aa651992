//! Shared application state

use super::config::Configuration;

/// State shared across all request handlers
pub struct AppState {
    pub configuration: Configuration,
}
