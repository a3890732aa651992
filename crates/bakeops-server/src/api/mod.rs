//! HTTP API endpoints

pub mod v1;
