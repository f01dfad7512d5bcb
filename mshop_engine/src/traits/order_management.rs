use chrono::{DateTime, FixedOffset};

use crate::db_types::{NewOrder, Order, OrderId};
use crate::traits::StorageError;

/// The order lifecycle, from insertion through payment confirmation.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Insert a new order in `UNPAID` status and return the stored record.
    ///
    /// Returns [`StorageError::DuplicateOrderId`] when the order id is already
    /// taken. Callers should retry with a fresh id.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, StorageError>;

    /// Fetch a single order by its public order id.
    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, StorageError>;

    /// All orders placed by the given user, newest first.
    async fn orders_for_user(&self, user_id: i64) -> Result<Vec<Order>, StorageError>;

    /// Mark the unpaid order carrying the given QR fingerprint as paid,
    /// recording the raw payment response and the confirmation time.
    ///
    /// Returns the updated order, or `None` when no unpaid order matches the
    /// fingerprint. Orders that are already paid are never modified, so the
    /// operation is safe to repeat.
    async fn mark_paid_by_fingerprint(
        &self,
        fingerprint: &str,
        payment_response: &str,
        paid_at: DateTime<FixedOffset>,
    ) -> Result<Option<Order>, StorageError>;
}
