//! Configuration property names and defaults

pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";
pub const SERVER_CONTEXT_PATH_PROPERTY: &str = "server.context_path";

pub const LOCK_TTL_SECONDS_PROPERTY: &str = "lock.ttl_seconds";
pub const LOCK_SWEEP_INTERVAL_SECONDS_PROPERTY: &str = "lock.sweep_interval_seconds";

pub const LOG_LEVEL_PROPERTY: &str = "logs.level";
pub const LOG_DIR_PROPERTY: &str = "logs.dir";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8230;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOCK_TTL_SECONDS: u64 = 60;
pub const DEFAULT_LOCK_SWEEP_INTERVAL_SECONDS: u64 = 5;
