//! Order lifecycle endpoints
//!
//! CRUD over the in-memory order directory plus the two status-change
//! operations: an explicit `transition` to a named target status and an
//! `advance` one step along the happy path. Deleting an order also purges
//! any outstanding edit lock through the coordinator.

use std::sync::Arc;

use actix_web::{HttpResponse, Scope, delete, get, post, web};
use bakeops_common::{ResourceKind, error as codes};
use bakeops_lifecycle::{LifecycleCoordinator, LifecycleError, ResourceDirectory, ScheduleDetails};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::model::response::Result;
use crate::service::InMemoryOrderStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionForm {
    pub target_status: String,
    /// `YYYY-MM-DD`; required when moving an internal order into
    /// `scheduled`
    pub production_date: Option<String>,
    pub assignee: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub resource_kind: ResourceKind,
    pub resource_id: String,
    pub status: String,
}

fn bad_kind(raw: &str) -> HttpResponse {
    Result::<()>::http_response(
        400,
        codes::PARAMETER_VALIDATE_ERROR.code,
        format!("unknown resource kind: {}", raw),
        (),
    )
}

fn lifecycle_failure(err: LifecycleError) -> HttpResponse {
    let message = err.to_string();
    match err {
        LifecycleError::NotFound => {
            Result::<()>::http_response(404, codes::RESOURCE_NOT_FOUND.code, message, ())
        }
        LifecycleError::UnknownStatus { .. } => {
            Result::<()>::http_response(400, codes::UNKNOWN_STATUS.code, message, ())
        }
        LifecycleError::InvalidTransition { allowed, .. } => Result::<()>::http_response(
            400,
            codes::INVALID_TRANSITION.code,
            message,
            json!({ "allowed": allowed }),
        ),
        LifecycleError::ScheduleRequired => {
            Result::<()>::http_response(400, codes::SCHEDULE_REQUIRED.code, message, ())
        }
        // A terminal state has nowhere to advance to; the empty allowed
        // list keeps the payload shape uniform for this code
        LifecycleError::NoNextStatus(_) => Result::<()>::http_response(
            400,
            codes::INVALID_TRANSITION.code,
            message,
            json!({ "allowed": [] }),
        ),
    }
}

#[post("/{kind}/{resource_id}")]
pub async fn create(
    path: web::Path<(String, String)>,
    store: web::Data<InMemoryOrderStore>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };

    match store.create(kind, &resource_id) {
        Some(current) => {
            info!(kind = %kind, resource_id = %resource_id, status = %current, "Order created");
            Result::<()>::http_success(OrderView {
                resource_kind: kind,
                resource_id,
                status: current,
            })
        }
        None => Result::<()>::http_response(
            409,
            codes::RESOURCE_CONFLICT.code,
            format!("{} {} already exists", kind, resource_id),
            (),
        ),
    }
}

#[get("/{kind}/{resource_id}")]
pub async fn status(
    path: web::Path<(String, String)>,
    coordinator: web::Data<Arc<LifecycleCoordinator>>,
    store: web::Data<InMemoryOrderStore>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };
    if !coordinator.resource_exists(kind, &resource_id) {
        return lifecycle_failure(LifecycleError::NotFound);
    }

    match store.status_of(kind, &resource_id) {
        Some(current) => Result::<()>::http_success(OrderView {
            resource_kind: kind,
            resource_id,
            status: current,
        }),
        None => lifecycle_failure(LifecycleError::NotFound),
    }
}

#[delete("/{kind}/{resource_id}")]
pub async fn remove(
    path: web::Path<(String, String)>,
    coordinator: web::Data<Arc<LifecycleCoordinator>>,
    store: web::Data<InMemoryOrderStore>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };

    if !store.delete(kind, &resource_id) {
        return lifecycle_failure(LifecycleError::NotFound);
    }
    coordinator.on_deleted(kind, &resource_id);
    Result::<()>::http_success(true)
}

#[post("/{kind}/{resource_id}/transition")]
pub async fn transition(
    path: web::Path<(String, String)>,
    form: web::Json<TransitionForm>,
    coordinator: web::Data<Arc<LifecycleCoordinator>>,
    store: web::Data<InMemoryOrderStore>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };

    let schedule = match &form.production_date {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(production_date) => Some(ScheduleDetails {
                production_date,
                assignee: form.assignee.clone(),
            }),
            Err(_) => {
                return Result::<()>::http_response(
                    400,
                    codes::PARAMETER_VALIDATE_ERROR.code,
                    format!("invalid production date: {}", raw),
                    (),
                );
            }
        },
        None => None,
    };

    match coordinator.on_status_change(kind, &resource_id, &form.target_status, schedule.as_ref()) {
        Ok(new_status) => {
            store.set_status(kind, &resource_id, &new_status);
            info!(
                kind = %kind,
                resource_id = %resource_id,
                status = %new_status,
                "Order status changed"
            );
            Result::<()>::http_success(OrderView {
                resource_kind: kind,
                resource_id,
                status: new_status,
            })
        }
        Err(err) => lifecycle_failure(err),
    }
}

#[post("/{kind}/{resource_id}/advance")]
pub async fn advance(
    path: web::Path<(String, String)>,
    coordinator: web::Data<Arc<LifecycleCoordinator>>,
    store: web::Data<InMemoryOrderStore>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };

    match coordinator.advance(kind, &resource_id) {
        Ok(new_status) => {
            store.set_status(kind, &resource_id, &new_status);
            info!(
                kind = %kind,
                resource_id = %resource_id,
                status = %new_status,
                "Order advanced"
            );
            Result::<()>::http_success(OrderView {
                resource_kind: kind,
                resource_id,
                status: new_status,
            })
        }
        Err(err) => lifecycle_failure(err),
    }
}

pub fn routes() -> Scope {
    web::scope("/orders")
        .service(create)
        .service(status)
        .service(remove)
        .service(transition)
        .service(advance)
}
