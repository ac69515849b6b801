use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web::ServiceConfig, App};
use chrono::{TimeZone, Utc};
use log::debug;
use payment_tracker_engine::db_types::{NewOrder, Order, OrderId, OrderStatusType};

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req = TestRequest::get().uri(path).to_request();
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making GET request to {path}");
    let (_, res) = test::call_service(&service, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub async fn post_request(
    path: &str,
    body: serde_json::Value,
    configure: fn(&mut ServiceConfig),
) -> (StatusCode, String) {
    let req = TestRequest::post().uri(path).set_json(&body).to_request();
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making POST request to {path}");
    let (_, res) = test::call_service(&service, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

/// An order as the store would return it right after insertion.
pub fn stored_order(id: &str, new_order: NewOrder) -> Order {
    Order {
        id: OrderId(id.to_string()),
        amount: new_order.amount,
        memo: new_order.memo,
        status: OrderStatusType::Created,
        created_at: Utc.with_ymd_and_hms(2026, 3, 15, 18, 30, 0).unwrap(),
        completed_at: None,
        txid: None,
        metadata: Some(NewOrder::empty_metadata()),
    }
}
