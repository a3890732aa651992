use actix_web::{Scope, web};

use super::{lock, order, state};

pub fn routes() -> Scope {
    web::scope("/v1")
        .service(state::server_state)
        .service(lock::routes())
        .service(order::routes())
}
