use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use khqr_tools::KhqrApi;
use log::info;
use mshop_engine::{CatalogApi, OrderFlowApi, OrderQueryApi, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::KhqrQrGenerator,
    routes::{health, BuyRoute, HomeRoute, MyOrdersRoute, OrderStatusRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let seeded = CatalogApi::new(db.clone())
        .seed_defaults()
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if seeded > 0 {
        info!("🛒️ Seeded the catalog with {seeded} stock items");
    }
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let qr_generator = KhqrQrGenerator::new(KhqrApi::new(config.khqr.clone()));
        let catalog_api = CatalogApi::new(db.clone());
        let queries_api = OrderQueryApi::new(db.clone());
        let orders_api = OrderFlowApi::new(db.clone(), qr_generator, config.timezone);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("mshop::access_log"))
            .app_data(web::Data::new(catalog_api))
            .app_data(web::Data::new(queries_api))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(config.shopper))
            .service(health)
            .service(HomeRoute::<SqliteDatabase>::new())
            .service(BuyRoute::<SqliteDatabase, KhqrQrGenerator>::new())
            .service(OrderStatusRoute::<SqliteDatabase>::new())
            .service(MyOrdersRoute::<SqliteDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
