use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Asia::Phnom_Penh;
use mshop_common::UsdAmount;
use mshop_engine::{
    db_types::{ItemPrice, NewOrder, Order, OrderId, OrderStatusType, GAME_MLBB},
    traits::PaymentQr,
    OrderFlowApi,
    OrderQueryApi,
};
use serde_json::json;

use super::{
    helpers::{get_request, post_form},
    mocks::{MockQr, MockShopDb},
};
use crate::{
    config::ShopperIdentity,
    data_objects::BuyRequest,
    routes::{BuyRoute, MyOrdersRoute, OrderStatusRoute},
};

fn buy_request() -> BuyRequest {
    BuyRequest {
        game: GAME_MLBB.to_string(),
        item_id: "86_DIAMOND".to_string(),
        server_id: "3051".to_string(),
        zone_id: "9981".to_string(),
    }
}

#[actix_web::test]
async fn buy_returns_order_id_amount_and_qr() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_form("/buy", &buy_request(), configure_buy).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).expect("Body is not JSON");
    assert_eq!(body["amount"], json!(0.03));
    assert_eq!(body["qr"], json!("iVBORw0KGgo="));
    let order_id = body["order_id"].as_str().expect("order_id missing");
    assert_eq!(order_id.len(), 8);
    assert!(order_id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[actix_web::test]
async fn buy_unknown_item_is_not_found() {
    let _ = env_logger::try_init().ok();
    let mut req = buy_request();
    req.item_id = "9999_DIAMOND".to_string();
    let (status, body) = post_form("/buy", &req, configure_buy).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"not found"}"#);
}

#[actix_web::test]
async fn buy_with_broken_qr_generator_is_a_server_error() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_form("/buy", &buy_request(), configure_broken_qr).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Could not generate a payment QR code"}"#);
}

#[actix_web::test]
async fn order_status_for_unpaid_order() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/order_status/AB12CD34", configure_queries).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"UNPAID","payment_response":null,"paid_at":null}"#);
}

#[actix_web::test]
async fn order_status_for_unknown_order_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/order_status/NOPE0000", configure_queries).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"not found"}"#);
}

#[actix_web::test]
async fn order_history_is_returned_as_stored() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/orders", configure_queries).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).expect("Body is not JSON");
    let ids: Vec<&str> = body
        .as_array()
        .expect("Expected an array")
        .iter()
        .map(|o| o["order_id"].as_str().expect("order_id missing"))
        .collect();
    assert_eq!(ids, vec!["ZZ99YY88", "AB12CD34"]);
}

fn catalog_item() -> ItemPrice {
    ItemPrice::new("86_DIAMOND", GAME_MLBB, UsdAmount::from_cents(3), UsdAmount::from_cents(3))
}

fn order_from(new_order: NewOrder) -> Order {
    Order {
        order_id: new_order.order_id,
        user_id: new_order.user_id,
        game: new_order.game,
        item_id: new_order.item_id,
        amount: new_order.amount,
        server_id: new_order.server_id,
        zone_id: new_order.zone_id,
        md5: new_order.md5,
        status: OrderStatusType::Unpaid,
        payment_response: None,
        created_at: new_order.created_at,
        paid_at: None,
    }
}

fn stored_order(order_id: &str, created_at: DateTime<FixedOffset>) -> Order {
    Order {
        order_id: OrderId::new(order_id),
        user_id: 1,
        game: GAME_MLBB.to_string(),
        item_id: "86_DIAMOND".to_string(),
        amount: UsdAmount::from_cents(800),
        server_id: "3051".to_string(),
        zone_id: "9981".to_string(),
        md5: "00112233445566778899aabbccddeeff".to_string(),
        status: OrderStatusType::Unpaid,
        payment_response: None,
        created_at,
        paid_at: None,
    }
}

fn configure_buy(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_item().returning(|_, item_id| {
        if item_id == "86_DIAMOND" {
            Ok(Some(catalog_item()))
        } else {
            Ok(None)
        }
    });
    db.expect_insert_order().returning(|new_order| Ok(order_from(new_order)));
    let mut qr = MockQr::new();
    qr.expect_generate_qr().returning(|_| {
        Ok(PaymentQr {
            image_b64: "iVBORw0KGgo=".to_string(),
            fingerprint: "00112233445566778899aabbccddeeff".to_string(),
        })
    });
    let api = OrderFlowApi::new(db, qr, Phnom_Penh);
    cfg.service(BuyRoute::<MockShopDb, MockQr>::new())
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(ShopperIdentity { user_id: 1 }));
}

fn configure_broken_qr(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_fetch_item().returning(|_, _| Ok(Some(catalog_item())));
    let mut qr = MockQr::new();
    qr.expect_generate_qr()
        .returning(|_| Err(mshop_engine::traits::QrGenerationError("KHQR service unavailable".to_string())));
    let api = OrderFlowApi::new(db, qr, Phnom_Penh);
    cfg.service(BuyRoute::<MockShopDb, MockQr>::new())
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(ShopperIdentity { user_id: 1 }));
}

fn configure_queries(cfg: &mut ServiceConfig) {
    let tz = FixedOffset::east_opt(7 * 3600).unwrap();
    let first = tz.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    let second = tz.with_ymd_and_hms(2024, 5, 2, 14, 0, 0).unwrap();
    let mut db = MockShopDb::new();
    db.expect_fetch_order_by_order_id().returning(move |order_id| {
        if order_id.as_str() == "AB12CD34" {
            Ok(Some(stored_order("AB12CD34", first)))
        } else {
            Ok(None)
        }
    });
    db.expect_orders_for_user()
        .returning(move |_| Ok(vec![stored_order("ZZ99YY88", second), stored_order("AB12CD34", first)]));
    let api = OrderQueryApi::new(db);
    cfg.service(OrderStatusRoute::<MockShopDb>::new())
        .service(MyOrdersRoute::<MockShopDb>::new())
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(ShopperIdentity { user_id: 1 }));
}
