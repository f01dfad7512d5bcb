//! The request and response payloads for the storefront endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use mshop_common::UsdAmount;
use mshop_engine::db_types::{ItemPrice, Order, OrderId, OrderStatusType};
use mshop_engine::CreatedOrder;
use serde::{Deserialize, Serialize};

/// Form payload for the purchase endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRequest {
    pub game: String,
    pub item_id: String,
    pub server_id: String,
    pub zone_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderCreatedResponse {
    pub order_id: OrderId,
    pub amount: UsdAmount,
    /// Base64-encoded PNG of the payment QR code.
    pub qr: String,
}

impl From<CreatedOrder> for OrderCreatedResponse {
    fn from(created: CreatedOrder) -> Self {
        Self { order_id: created.order_id, amount: created.amount, qr: created.qr_image }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusResponse {
    pub status: OrderStatusType,
    pub payment_response: Option<String>,
    pub paid_at: Option<DateTime<FixedOffset>>,
}

impl From<Order> for OrderStatusResponse {
    fn from(order: Order) -> Self {
        Self { status: order.status, payment_response: order.payment_response, paid_at: order.paid_at }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceTiers {
    pub normal: UsdAmount,
    pub reseller: UsdAmount,
}

/// The storefront landing payload. Items are keyed by item id so the client
/// can render them in a stable order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub ml_items: BTreeMap<String, PriceTiers>,
    pub ff_items: BTreeMap<String, PriceTiers>,
    /// Whether the shopper qualifies for the reseller price column.
    pub reseller: bool,
}

impl CatalogResponse {
    pub fn new(ml_items: Vec<ItemPrice>, ff_items: Vec<ItemPrice>, reseller: bool) -> Self {
        Self { ml_items: price_map(ml_items), ff_items: price_map(ff_items), reseller }
    }
}

fn price_map(items: Vec<ItemPrice>) -> BTreeMap<String, PriceTiers> {
    items
        .into_iter()
        .map(|i| (i.item_id, PriceTiers { normal: i.normal_price, reseller: i.reseller_price }))
        .collect()
}

/// One row in the shopper's order history.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub game: String,
    pub item_id: String,
    pub amount: UsdAmount,
    pub server_id: String,
    pub zone_id: String,
    pub status: OrderStatusType,
    pub created_at: DateTime<FixedOffset>,
    pub paid_at: Option<DateTime<FixedOffset>>,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            game: order.game,
            item_id: order.item_id,
            amount: order.amount,
            server_id: order.server_id,
            zone_id: order.zone_id,
            status: order.status,
            created_at: order.created_at,
            paid_at: order.paid_at,
        }
    }
}
