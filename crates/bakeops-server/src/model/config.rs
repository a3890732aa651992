//! Configuration management for the BakeOps server
//!
//! This module handles loading and accessing application configuration
//! from `conf/application.yml`, environment variables, and CLI overrides.

use std::path::PathBuf;
use std::time::Duration;

use bakeops_lock::LockConfig;
use clap::Parser;
use config::{Config, Environment};

use super::constants::{
    DEFAULT_LOCK_SWEEP_INTERVAL_SECONDS, DEFAULT_LOCK_TTL_SECONDS, DEFAULT_LOG_LEVEL,
    DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT, LOCK_SWEEP_INTERVAL_SECONDS_PROPERTY,
    LOCK_TTL_SECONDS_PROPERTY, LOG_DIR_PROPERTY, LOG_LEVEL_PROPERTY, SERVER_ADDRESS_PROPERTY,
    SERVER_CONTEXT_PATH_PROPERTY, SERVER_PORT_PROPERTY,
};
use crate::startup::LoggingConfig;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command(name = "bakeops-server")]
struct Cli {
    #[arg(short = 'c', long = "config", default_value = "conf/application.yml")]
    config_file: String,
    #[arg(short = 'p', long = "port", env = "BAKEOPS_SERVER_PORT")]
    port: Option<u16>,
    #[arg(long = "lock-ttl-seconds")]
    lock_ttl_seconds: Option<u64>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(config::File::with_name(&args.config_file).required(false))
            .add_source(
                Environment::with_prefix("bakeops")
                    .separator(".")
                    .try_parsing(true),
            );

        if let Some(port) = args.port {
            config_builder = config_builder
                .set_override(SERVER_PORT_PROPERTY, port as i64)
                .expect("Failed to set server port override");
        }
        if let Some(ttl) = args.lock_ttl_seconds {
            config_builder = config_builder
                .set_override(LOCK_TTL_SECONDS_PROPERTY, ttl as i64)
                .expect("Failed to set lock TTL override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT_PROPERTY)
            .map(|port| port as u16)
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn server_context_path(&self) -> String {
        self.config
            .get_string(SERVER_CONTEXT_PATH_PROPERTY)
            .unwrap_or_default()
    }

    pub fn lock_config(&self) -> LockConfig {
        let ttl_seconds = self
            .config
            .get_int(LOCK_TTL_SECONDS_PROPERTY)
            .map(|seconds| seconds.max(1) as u64)
            .unwrap_or(DEFAULT_LOCK_TTL_SECONDS);
        let sweep_seconds = self
            .config
            .get_int(LOCK_SWEEP_INTERVAL_SECONDS_PROPERTY)
            .map(|seconds| seconds.max(1) as u64)
            .unwrap_or(DEFAULT_LOCK_SWEEP_INTERVAL_SECONDS);

        LockConfig {
            ttl: Duration::from_secs(ttl_seconds),
            sweep_interval: Duration::from_secs(sweep_seconds),
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self
                .config
                .get_string(LOG_LEVEL_PROPERTY)
                .unwrap_or(DEFAULT_LOG_LEVEL.to_string()),
            dir: self
                .config
                .get_string(LOG_DIR_PROPERTY)
                .ok()
                .map(PathBuf::from),
        }
    }
}
