use std::fmt::Debug;

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use log::{debug, info, warn};
use mshop_common::UsdAmount;
use serde::Serialize;

use crate::db_types::{NewOrder, Order, OrderId};
use crate::shop_api::errors::OrderManagerError;
use crate::traits::{PaymentQrGenerator, ShopDatabase, StorageError};

/// How many times to retry order insertion when the random order id collides
/// with an existing one. With 36^8 possible ids this is vanishingly rare.
pub const MAX_ORDER_ID_ATTEMPTS: u32 = 5;

/// The result of a successful purchase request.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedOrder {
    pub order_id: OrderId,
    pub amount: UsdAmount,
    /// Base64-encoded PNG of the payment QR code.
    pub qr_image: String,
}

/// Drives the order lifecycle: purchase requests on one side, payment
/// confirmations on the other.
#[derive(Clone)]
pub struct OrderFlowApi<B, Q> {
    db: B,
    qr_generator: Q,
    timezone: Tz,
}

impl<B: Debug, Q> Debug for OrderFlowApi<B, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi ({:?}, tz {})", self.db, self.timezone)
    }
}

impl<B, Q> OrderFlowApi<B, Q>
where
    B: ShopDatabase,
    Q: PaymentQrGenerator,
{
    pub fn new(db: B, qr_generator: Q, timezone: Tz) -> Self {
        Self { db, qr_generator, timezone }
    }

    /// Order timestamps are recorded in the merchant's local timezone.
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.timezone).fixed_offset()
    }

    /// Create a new order for the given user and item.
    ///
    /// The item is priced from the catalog, a KHQR code is generated for the
    /// amount, and the order is stored as `UNPAID` carrying the QR
    /// fingerprint. If the QR code cannot be generated, no order is created.
    pub async fn create_order(
        &self,
        user_id: i64,
        game: &str,
        item_id: &str,
        server_id: &str,
        zone_id: &str,
    ) -> Result<CreatedOrder, OrderManagerError> {
        let item = self.db.fetch_item(game, item_id).await?.ok_or_else(|| {
            OrderManagerError::ItemNotFound { game: game.to_string(), item_id: item_id.to_string() }
        })?;
        // Resellers currently pay the normal price too. The reseller tier is
        // shown in the storefront but not applied at checkout yet.
        let amount = item.normal_price;
        let qr = self.qr_generator.generate_qr(amount).await.map_err(|e| {
            warn!("🛒️ Could not generate a QR code for {amount}. {e}");
            OrderManagerError::PaymentGenerationFailed
        })?;
        let created_at = self.now();
        for _ in 0..MAX_ORDER_ID_ATTEMPTS {
            let new_order = NewOrder {
                order_id: OrderId::random(),
                user_id,
                game: game.to_string(),
                item_id: item_id.to_string(),
                amount,
                server_id: server_id.to_string(),
                zone_id: zone_id.to_string(),
                md5: qr.fingerprint.clone(),
                created_at,
            };
            match self.db.insert_order(new_order).await {
                Ok(order) => {
                    debug!("🛒️ {order}");
                    return Ok(CreatedOrder {
                        order_id: order.order_id,
                        amount: order.amount,
                        qr_image: qr.image_b64,
                    });
                }
                Err(StorageError::DuplicateOrderId(id)) => {
                    warn!("🛒️ Order id {id} is already taken. Retrying with a fresh id");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(OrderManagerError::OrderIdAllocation(MAX_ORDER_ID_ATTEMPTS))
    }

    /// Process a payment notification for the QR code with the given MD5
    /// fingerprint.
    ///
    /// Returns the order that was flipped to `PAID`, or `None` when no unpaid
    /// order matches. Repeated notifications for the same payment are
    /// harmless.
    pub async fn confirm_payment(
        &self,
        fingerprint: &str,
        payment_response: &str,
    ) -> Result<Option<Order>, OrderManagerError> {
        let paid_at = self.now();
        let order = self.db.mark_paid_by_fingerprint(fingerprint, payment_response, paid_at).await?;
        match &order {
            Some(order) => info!("🛒️ Order {} is paid", order.order_id),
            None => debug!("🛒️ No unpaid order matches fingerprint {fingerprint}. Ignoring"),
        }
        Ok(order)
    }
}
