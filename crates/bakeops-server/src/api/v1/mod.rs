//! V1 API endpoints

pub mod lock;
pub mod order;
pub mod route;
pub mod state;
