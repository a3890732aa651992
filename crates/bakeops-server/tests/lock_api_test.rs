// Integration tests for the edit-lock HTTP endpoints.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use bakeops_lifecycle::LifecycleCoordinator;
use bakeops_lock::{LockConfig, LockService};
use bakeops_server::{api, service::InMemoryOrderStore};
use serde_json::{Value, json};
use uuid::Uuid;

fn components() -> (Arc<LockService>, Arc<LifecycleCoordinator>, InMemoryOrderStore) {
    let locks = Arc::new(LockService::new(&LockConfig::default()));
    let store = InMemoryOrderStore::new();
    let coordinator = Arc::new(LifecycleCoordinator::new(
        locks.clone(),
        Arc::new(store.clone()),
    ));
    (locks, coordinator, store)
}

fn acquire_body(session_id: &str, user_id: &str, display_name: &str) -> Value {
    json!({
        "sessionId": session_id,
        "userId": user_id,
        "displayName": display_name,
    })
}

macro_rules! test_app {
    ($locks:expr, $coordinator:expr, $store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($locks.clone()))
                .app_data(web::Data::new($coordinator.clone()))
                .app_data(web::Data::new($store.clone()))
                .service(api::v1::route::routes()),
        )
        .await
    };
}

#[actix_web::test]
async fn test_acquire_success() {
    let (locks, coordinator, store) = components();
    store.create(bakeops_common::ResourceKind::CustomerOrder, "ord-1");
    let app = test_app!(locks, coordinator, store);

    let session = Uuid::new_v4().to_string();
    let req = test::TestRequest::post()
        .uri("/v1/locks/customer-order/ord-1/acquire")
        .set_json(acquire_body(&session, "u1", "Ada"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["ownerSessionId"], session.as_str());
    assert_eq!(body["data"]["ownerDisplayName"], "Ada");
    assert_eq!(body["data"]["resourceKind"], "customer-order");
}

#[actix_web::test]
async fn test_acquire_conflict_reports_holder() {
    let (locks, coordinator, store) = components();
    store.create(bakeops_common::ResourceKind::CustomerOrder, "ord-1");
    let app = test_app!(locks, coordinator, store);

    let req = test::TestRequest::post()
        .uri("/v1/locks/customer-order/ord-1/acquire")
        .set_json(acquire_body("s1", "u1", "Ada"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::OK
    );

    let req = test::TestRequest::post()
        .uri("/v1/locks/customer-order/ord-1/acquire")
        .set_json(acquire_body("s2", "u2", "Grace"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 24000);
    assert_eq!(body["data"]["heldBy"], "Ada");
    assert_eq!(body["data"]["heldByUserId"], "u1");
    assert!(body["data"]["since"].is_i64());
}

#[actix_web::test]
async fn test_acquire_unknown_order() {
    let (locks, coordinator, store) = components();
    let app = test_app!(locks, coordinator, store);

    let req = test::TestRequest::post()
        .uri("/v1/locks/customer-order/ghost/acquire")
        .set_json(acquire_body("s1", "u1", "Ada"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 20004);
}

#[actix_web::test]
async fn test_acquire_rejects_bad_kind_and_session() {
    let (locks, coordinator, store) = components();
    store.create(bakeops_common::ResourceKind::CustomerOrder, "ord-1");
    let app = test_app!(locks, coordinator, store);

    let req = test::TestRequest::post()
        .uri("/v1/locks/recipe/ord-1/acquire")
        .set_json(acquire_body("s1", "u1", "Ada"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 20002);

    let req = test::TestRequest::post()
        .uri("/v1/locks/customer-order/ord-1/acquire")
        .set_json(acquire_body("bad session!", "u1", "Ada"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Renew and release validate the session id the same way as acquire
    let req = test::TestRequest::put()
        .uri("/v1/locks/customer-order/ord-1/renew")
        .set_json(json!({"sessionId": "bad session!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 20002);

    let req = test::TestRequest::delete()
        .uri("/v1/locks/customer-order/ord-1?sessionId=bad%20session%21")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 20002);
}

#[actix_web::test]
async fn test_renew_failures() {
    let (locks, coordinator, store) = components();
    store.create(bakeops_common::ResourceKind::CustomerOrder, "ord-1");
    let app = test_app!(locks, coordinator, store);

    // No lock yet
    let req = test::TestRequest::put()
        .uri("/v1/locks/customer-order/ord-1/renew")
        .set_json(json!({"sessionId": "s1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 24003);

    // Held by someone else
    let req = test::TestRequest::post()
        .uri("/v1/locks/customer-order/ord-1/acquire")
        .set_json(acquire_body("s1", "u1", "Ada"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/v1/locks/customer-order/ord-1/renew")
        .set_json(json!({"sessionId": "s2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 24001);
}

#[actix_web::test]
async fn test_release_then_reacquire() {
    let (locks, coordinator, store) = components();
    store.create(bakeops_common::ResourceKind::InternalOrder, "prod-1");
    let app = test_app!(locks, coordinator, store);

    let req = test::TestRequest::post()
        .uri("/v1/locks/internal-order/prod-1/acquire")
        .set_json(acquire_body("s1", "u1", "Ada"))
        .to_request();
    test::call_service(&app, req).await;

    // Release is always 200, even for a non-owner
    let req = test::TestRequest::delete()
        .uri("/v1/locks/internal-order/prod-1?sessionId=s2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri("/v1/locks/internal-order/prod-1?sessionId=s1")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::OK
    );

    let req = test::TestRequest::post()
        .uri("/v1/locks/internal-order/prod-1/acquire")
        .set_json(acquire_body("s2", "u2", "Grace"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_status_reflects_lock_state() {
    let (locks, coordinator, store) = components();
    store.create(bakeops_common::ResourceKind::CustomerOrder, "ord-1");
    let app = test_app!(locks, coordinator, store);

    let req = test::TestRequest::get()
        .uri("/v1/locks/customer-order/ord-1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["locked"], false);

    let req = test::TestRequest::post()
        .uri("/v1/locks/customer-order/ord-1/acquire")
        .set_json(acquire_body("s1", "u1", "Ada"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/v1/locks/customer-order/ord-1")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["locked"], true);
    assert_eq!(body["data"]["ownerSessionId"], "s1");

    // Unknown order reads as 404, not "unlocked"
    let req = test::TestRequest::get()
        .uri("/v1/locks/customer-order/ghost")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
