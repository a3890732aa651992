//! Server models and shared application structures

pub mod app_state;
pub mod config;
pub mod constants;
pub mod response;

pub use app_state::AppState;
pub use config::Configuration;
pub use response::Result;
