//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏

use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use mshop_engine::{
    db_types::{OrderId, GAME_FF, GAME_MLBB},
    traits::{CatalogManagement, OrderManagement, PaymentQrGenerator, ShopDatabase},
    CatalogApi,
    OrderFlowApi,
    OrderQueryApi,
};

use crate::{
    config::ShopperIdentity,
    data_objects::{BuyRequest, CatalogResponse, OrderCreatedResponse, OrderStatusResponse, OrderSummary},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Catalog  ----------------------------------------------------
route!(home => Get "/" impl CatalogManagement);
/// The storefront landing data: the diamond packs for both games, plus
/// whether the shopper is on the reseller tier.
pub async fn home<B: CatalogManagement>(
    api: web::Data<CatalogApi<B>>,
    shopper: web::Data<ShopperIdentity>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET catalog for user {}", shopper.user_id);
    let ml_items = api.item_prices(GAME_MLBB).await.map_err(|e| ServerError::BackendError(e.to_string()))?;
    let ff_items = api.item_prices(GAME_FF).await.map_err(|e| ServerError::BackendError(e.to_string()))?;
    let reseller = api.is_reseller(shopper.user_id).await.map_err(|e| ServerError::BackendError(e.to_string()))?;
    Ok(HttpResponse::Ok().json(CatalogResponse::new(ml_items, ff_items, reseller)))
}

//----------------------------------------------   Buy  ----------------------------------------------------
route!(buy => Post "/buy" impl ShopDatabase, PaymentQrGenerator);
/// Place an order for a diamond pack.
///
/// On success the response carries the new order id, the amount due, and a
/// base64 PNG of the KHQR code the customer pays with. An unknown
/// (game, item) pair is a 404; if the QR code cannot be produced, no order is
/// created and the response is a 500.
pub async fn buy<B: ShopDatabase, Q: PaymentQrGenerator>(
    form: web::Form<BuyRequest>,
    api: web::Data<OrderFlowApi<B, Q>>,
    shopper: web::Data<ShopperIdentity>,
) -> Result<HttpResponse, ServerError> {
    let form = form.into_inner();
    debug!("💻️ POST buy {}/{} for user {}", form.game, form.item_id, shopper.user_id);
    let created = api
        .create_order(shopper.user_id, &form.game, &form.item_id, &form.server_id, &form.zone_id)
        .await?;
    Ok(HttpResponse::Ok().json(OrderCreatedResponse::from(created)))
}

//----------------------------------------------   Order status  ----------------------------------------------------
route!(order_status => Get "/order_status/{order_id}" impl OrderManagement);
/// Poll the payment status of an order.
pub async fn order_status<B: OrderManagement>(
    path: web::Path<String>,
    api: web::Data<OrderQueryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId::new(path.into_inner());
    debug!("💻️ GET order_status for {order_id}");
    let order = api.fetch_order(&order_id).await?.ok_or(ServerError::NoRecordFound)?;
    Ok(HttpResponse::Ok().json(OrderStatusResponse::from(order)))
}

//----------------------------------------------   Order history  ----------------------------------------------------
route!(my_orders => Get "/orders" impl OrderManagement);
/// The shopper's order history, newest first.
pub async fn my_orders<B: OrderManagement>(
    api: web::Data<OrderQueryApi<B>>,
    shopper: web::Data<ShopperIdentity>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET orders for user {}", shopper.user_id);
    let orders = api.orders_for_user(shopper.user_id).await?;
    let orders = orders.into_iter().map(OrderSummary::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(orders))
}
