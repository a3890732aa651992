//! BakeOps server library
//!
//! HTTP surface for the order edit-lock manager and lifecycle state
//! machine. The external CRUD platform is represented by the in-memory
//! order directory in [`service`]; a real deployment swaps it out behind
//! the `ResourceDirectory` trait.

pub mod api;
pub mod model;
pub mod service;
pub mod startup;
