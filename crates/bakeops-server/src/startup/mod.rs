//! Application startup utilities module.

mod http;
mod logging;
mod shutdown;

pub use http::main_server;
pub use logging::{LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{ShutdownSignal, wait_for_shutdown_signal};
