//! Edit-lock endpoints
//!
//! Lock routes live under `/v1/locks/{kind}/{resourceId}` where `kind` is
//! `customer-order` or `internal-order`. Conflicts surface the holder's
//! identity so clients can render "Maria is editing this order".

use std::sync::Arc;

use actix_web::{HttpResponse, Scope, delete, get, post, put, web};
use bakeops_common::{ResourceKind, error as codes, is_valid_identifier};
use bakeops_lifecycle::ResourceDirectory;
use bakeops_lock::{LockError, LockRecord, LockService, LockStatus, OwnerIdentity};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::response::Result;
use crate::service::InMemoryOrderStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquireForm {
    pub session_id: String,
    pub user_id: String,
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionForm {
    pub session_id: String,
}

/// Holder identity returned with a `409` acquire rejection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictInfo {
    pub held_by: String,
    pub held_by_user_id: String,
    pub since: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatusResponse {
    pub locked: bool,
    #[serde(flatten)]
    pub record: Option<LockRecord>,
}

fn bad_kind(raw: &str) -> HttpResponse {
    Result::<()>::http_response(
        400,
        codes::PARAMETER_VALIDATE_ERROR.code,
        format!("unknown resource kind: {}", raw),
        (),
    )
}

fn bad_session() -> HttpResponse {
    Result::<()>::http_response(
        400,
        codes::PARAMETER_VALIDATE_ERROR.code,
        "invalid session id".to_string(),
        (),
    )
}

fn order_not_found(kind: ResourceKind, resource_id: &str) -> HttpResponse {
    Result::<()>::http_response(
        404,
        codes::RESOURCE_NOT_FOUND.code,
        format!("no {} with id {}", kind, resource_id),
        (),
    )
}

#[post("/{kind}/{resource_id}/acquire")]
pub async fn acquire(
    path: web::Path<(String, String)>,
    form: web::Json<AcquireForm>,
    locks: web::Data<Arc<LockService>>,
    store: web::Data<InMemoryOrderStore>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };
    if !is_valid_identifier(&form.session_id) {
        return bad_session();
    }
    if !store.exists(kind, &resource_id) {
        return order_not_found(kind, &resource_id);
    }

    let identity = OwnerIdentity {
        user_id: form.user_id.clone(),
        display_name: form.display_name.clone(),
    };
    match locks.acquire(kind, &resource_id, &form.session_id, &identity) {
        Ok(record) => {
            info!(
                kind = %kind,
                resource_id = %resource_id,
                user_id = %record.owner_user_id,
                "Edit lock granted"
            );
            Result::<()>::http_success(record)
        }
        Err(LockError::Conflict {
            owner_user_id,
            owner_display_name,
            acquired_at,
        }) => Result::<()>::http_response(
            409,
            codes::LOCK_CONFLICT.code,
            format!("{} is editing this order", owner_display_name),
            ConflictInfo {
                held_by: owner_display_name,
                held_by_user_id: owner_user_id,
                since: acquired_at,
            },
        ),
        Err(err) => Result::<()>::http_response(500, codes::SERVER_ERROR.code, err.to_string(), ()),
    }
}

#[put("/{kind}/{resource_id}/renew")]
pub async fn renew(
    path: web::Path<(String, String)>,
    form: web::Json<SessionForm>,
    locks: web::Data<Arc<LockService>>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };
    if !is_valid_identifier(&form.session_id) {
        return bad_session();
    }

    match locks.renew(kind, &resource_id, &form.session_id) {
        Ok(record) => Result::<()>::http_success(record),
        Err(err @ LockError::NotOwned) => {
            Result::<()>::http_response(401, codes::LOCK_NOT_OWNED.code, err.to_string(), ())
        }
        Err(err @ LockError::Expired) => {
            Result::<()>::http_response(404, codes::LOCK_EXPIRED.code, err.to_string(), ())
        }
        Err(err) => Result::<()>::http_response(404, codes::LOCK_NOT_FOUND.code, err.to_string(), ()),
    }
}

/// Release is idempotent and always answers `200`: clients call it from
/// page-unload and logout paths where a failure is not actionable.
#[delete("/{kind}/{resource_id}")]
pub async fn release(
    path: web::Path<(String, String)>,
    query: web::Query<SessionForm>,
    locks: web::Data<Arc<LockService>>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };
    if !is_valid_identifier(&query.session_id) {
        return bad_session();
    }

    locks.release(kind, &resource_id, &query.session_id);
    Result::<()>::http_success(true)
}

#[get("/{kind}/{resource_id}")]
pub async fn status(
    path: web::Path<(String, String)>,
    locks: web::Data<Arc<LockService>>,
    store: web::Data<InMemoryOrderStore>,
) -> HttpResponse {
    let (kind_raw, resource_id) = path.into_inner();
    let Ok(kind) = kind_raw.parse::<ResourceKind>() else {
        return bad_kind(&kind_raw);
    };
    if !store.exists(kind, &resource_id) {
        return order_not_found(kind, &resource_id);
    }

    let response = match locks.status(kind, &resource_id) {
        LockStatus::Locked(record) => LockStatusResponse {
            locked: true,
            record: Some(record),
        },
        LockStatus::Unlocked => LockStatusResponse {
            locked: false,
            record: None,
        },
    };
    Result::<()>::http_success(response)
}

pub fn routes() -> Scope {
    web::scope("/locks")
        .service(acquire)
        .service(renew)
        .service(release)
        .service(status)
}
