//! Server state endpoint

use actix_web::{HttpResponse, get, web};
use serde::Serialize;

use crate::model::AppState;
use crate::model::response::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerState {
    pub version: &'static str,
    /// Seconds an unrenewed lock stays valid
    pub lock_ttl_seconds: u64,
    /// Cadence at which clients should heartbeat their held locks
    pub renew_interval_seconds: u64,
}

#[get("/state")]
pub async fn server_state(data: web::Data<AppState>) -> HttpResponse {
    let lock_config = data.configuration.lock_config();
    Result::<()>::http_success(ServerState {
        version: env!("CARGO_PKG_VERSION"),
        lock_ttl_seconds: lock_config.ttl.as_secs(),
        renew_interval_seconds: lock_config.renew_interval().as_secs(),
    })
}
