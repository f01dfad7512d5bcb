use std::fmt::Debug;

use crate::db_types::{Order, OrderId};
use crate::shop_api::errors::OrderManagerError;
use crate::traits::OrderManagement;

/// Read-only access to orders for the status and history endpoints.
#[derive(Clone)]
pub struct OrderQueryApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrderQueryApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderQueryApi ({:?})", self.db)
    }
}

impl<B> OrderQueryApi<B>
where
    B: OrderManagement,
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderManagerError> {
        let order = self.db.fetch_order_by_order_id(order_id).await?;
        Ok(order)
    }

    /// The user's order history, newest first.
    pub async fn orders_for_user(&self, user_id: i64) -> Result<Vec<Order>, OrderManagerError> {
        let orders = self.db.orders_for_user(user_id).await?;
        Ok(orders)
    }
}
