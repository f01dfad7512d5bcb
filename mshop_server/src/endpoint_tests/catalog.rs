use actix_web::{http::StatusCode, web, web::ServiceConfig};
use mshop_common::UsdAmount;
use mshop_engine::{
    db_types::{ItemPrice, GAME_FF, GAME_MLBB},
    CatalogApi,
};
use serde_json::json;

use super::{helpers::get_request, mocks::MockShopDb};
use crate::{config::ShopperIdentity, routes::HomeRoute};

#[actix_web::test]
async fn catalog_lists_both_games() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).expect("Body is not JSON");
    assert_eq!(
        body,
        json!({
            "ml_items": {
                "86_DIAMOND": { "normal": 0.03, "reseller": 0.03 },
                "429_DIAMOND": { "normal": 8.0, "reseller": 7.0 },
            },
            "ff_items": {
                "50_DIAMOND": { "normal": 1.0, "reseller": 0.85 },
            },
            "reseller": true,
        })
    );
}

fn configure(cfg: &mut ServiceConfig) {
    let mut db = MockShopDb::new();
    db.expect_item_prices_for_game().returning(|game| match game {
        GAME_MLBB => Ok(vec![
            ItemPrice::new("86_DIAMOND", GAME_MLBB, UsdAmount::from_cents(3), UsdAmount::from_cents(3)),
            ItemPrice::new("429_DIAMOND", GAME_MLBB, UsdAmount::from_cents(800), UsdAmount::from_cents(700)),
        ]),
        _ => Ok(vec![ItemPrice::new(
            "50_DIAMOND",
            GAME_FF,
            UsdAmount::from_cents(100),
            UsdAmount::from_cents(85),
        )]),
    });
    db.expect_is_reseller().returning(|_| Ok(true));
    let api = CatalogApi::new(db);
    cfg.service(HomeRoute::<MockShopDb>::new())
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(ShopperIdentity { user_id: 1 }));
}
