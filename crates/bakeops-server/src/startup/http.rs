//! HTTP server setup module.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};
use bakeops_lifecycle::LifecycleCoordinator;
use bakeops_lock::LockService;

use crate::{api, model::AppState, service::InMemoryOrderStore};

/// Creates and binds the main HTTP server.
///
/// Serves the edit-lock and order lifecycle endpoints under the configured
/// context path.
pub fn main_server(
    app_state: Arc<AppState>,
    lock_service: Arc<LockService>,
    coordinator: Arc<LifecycleCoordinator>,
    order_store: InMemoryOrderStore,
    context_path: String,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .app_data(web::Data::new(lock_service.clone()))
            .app_data(web::Data::new(coordinator.clone()))
            .app_data(web::Data::new(order_store.clone()))
            .service(web::scope(&context_path).service(api::v1::route::routes()))
    })
    .bind((address, port))?
    .run())
}
