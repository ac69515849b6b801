use actix_web::{http::StatusCode, web, web::ServiceConfig};
use payment_tracker_engine::{traits::OrderStoreError, NoopPaymentAuthority, OrderFlowApi};
use serde_json::json;

use super::{
    helpers::{post_request, stored_order},
    mocks::MockOrderStore,
};
use crate::routes::{ApprovePaymentRoute, CompletePaymentRoute, CreateOrderRoute};

const NEW_ORDER_ID: &str = "11111111-0000-0000-0000-000000000000";

#[actix_web::test]
async fn create_order_returns_new_id() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "amount": 3.5, "memo": "coffee" });
    let (status, body) = post_request("/payments/create", body, configure_create).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!(r#"{{"id":"{NEW_ORDER_ID}"}}"#));
}

#[actix_web::test]
async fn create_order_without_memo() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "amount": 100.0 });
    let (status, body) = post_request("/payments/create", body, configure_create).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!(r#"{{"id":"{NEW_ORDER_ID}"}}"#));
}

#[actix_web::test]
async fn approve_acknowledges_with_payment_id() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "paymentId": "pay-123", "appPaymentId": NEW_ORDER_ID });
    let (status, body) = post_request("/payments/approve", body, configure_approve).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true,"paymentId":"pay-123"}"#);
}

#[actix_web::test]
async fn approve_without_reference_touches_nothing() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "paymentId": "pay-456" });
    let (status, body) = post_request("/payments/approve", body, configure_approve_untouched).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true,"paymentId":"pay-456"}"#);
}

#[actix_web::test]
async fn approve_unmatched_reference_still_acknowledges() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "paymentId": "pay-789", "appPaymentId": "no-such-order" });
    let (status, body) = post_request("/payments/approve", body, configure_approve_unmatched).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true,"paymentId":"pay-789"}"#);
}

#[actix_web::test]
async fn approve_reports_storage_failures() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "paymentId": "pay-123", "appPaymentId": NEW_ORDER_ID });
    let (status, body) = post_request("/payments/approve", body, configure_approve_failing).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        r#"{"error":"An error occurred on the backend of the server. Internal database error: connection lost"}"#
    );
}

#[actix_web::test]
async fn complete_acknowledges_with_txid() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "paymentId": "pay-9", "txid": "tx-1", "appPaymentId": NEW_ORDER_ID });
    let (status, body) = post_request("/payments/complete", body, configure_complete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true,"paymentId":"pay-9","txid":"tx-1"}"#);
}

#[actix_web::test]
async fn complete_without_txid_still_acknowledges() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "paymentId": "pay-9", "appPaymentId": NEW_ORDER_ID });
    let (status, body) = post_request("/payments/complete", body, configure_complete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true,"paymentId":"pay-9","txid":null}"#);
}

fn configure_create(cfg: &mut ServiceConfig) {
    let mut store = MockOrderStore::new();
    store.expect_insert_order().returning(|order| Ok(stored_order(NEW_ORDER_ID, order)));
    let api = OrderFlowApi::new(store, NoopPaymentAuthority);
    cfg.service(CreateOrderRoute::<MockOrderStore, NoopPaymentAuthority>::new()).app_data(web::Data::new(api));
}

fn configure_approve(cfg: &mut ServiceConfig) {
    let mut store = MockOrderStore::new();
    store.expect_approve_order().returning(|_| Ok(true));
    let api = OrderFlowApi::new(store, NoopPaymentAuthority);
    cfg.service(ApprovePaymentRoute::<MockOrderStore, NoopPaymentAuthority>::new()).app_data(web::Data::new(api));
}

fn configure_approve_untouched(cfg: &mut ServiceConfig) {
    let mut store = MockOrderStore::new();
    // No appPaymentId in the request, so the store must never be touched
    store.expect_approve_order().times(0);
    let api = OrderFlowApi::new(store, NoopPaymentAuthority);
    cfg.service(ApprovePaymentRoute::<MockOrderStore, NoopPaymentAuthority>::new()).app_data(web::Data::new(api));
}

fn configure_approve_unmatched(cfg: &mut ServiceConfig) {
    let mut store = MockOrderStore::new();
    store.expect_approve_order().returning(|_| Ok(false));
    let api = OrderFlowApi::new(store, NoopPaymentAuthority);
    cfg.service(ApprovePaymentRoute::<MockOrderStore, NoopPaymentAuthority>::new()).app_data(web::Data::new(api));
}

fn configure_approve_failing(cfg: &mut ServiceConfig) {
    let mut store = MockOrderStore::new();
    store
        .expect_approve_order()
        .returning(|_| Err(OrderStoreError::DatabaseError("connection lost".to_string())));
    let api = OrderFlowApi::new(store, NoopPaymentAuthority);
    cfg.service(ApprovePaymentRoute::<MockOrderStore, NoopPaymentAuthority>::new()).app_data(web::Data::new(api));
}

fn configure_complete(cfg: &mut ServiceConfig) {
    let mut store = MockOrderStore::new();
    store.expect_complete_order().returning(|_, _| Ok(true));
    let api = OrderFlowApi::new(store, NoopPaymentAuthority);
    cfg.service(CompletePaymentRoute::<MockOrderStore, NoopPaymentAuthority>::new()).app_data(web::Data::new(api));
}
