use chrono::{DateTime, FixedOffset};
use log::trace;
use sqlx::SqliteConnection;

use crate::db_types::{NewOrder, Order, OrderId, OrderStatusType};
use crate::traits::StorageError;

/// Insert a new order in `UNPAID` status and return the stored row.
///
/// A primary key clash on the order id maps to
/// [`StorageError::DuplicateOrderId`] so the caller can retry with a new id.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, StorageError> {
    let result = sqlx::query_as::<_, Order>(
        r#"INSERT INTO orders (order_id, user_id, game, item_id, amount, server_id, zone_id, md5, status, created_at)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *"#,
    )
    .bind(order.order_id.clone())
    .bind(order.user_id)
    .bind(&order.game)
    .bind(&order.item_id)
    .bind(order.amount)
    .bind(&order.server_id)
    .bind(&order.zone_id)
    .bind(&order.md5)
    .bind(OrderStatusType::Unpaid)
    .bind(order.created_at)
    .fetch_one(conn)
    .await;
    match result {
        Ok(inserted) => {
            trace!("🗃️ Order {} inserted", inserted.order_id);
            Ok(inserted)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(StorageError::DuplicateOrderId(order.order_id))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn fetch_order_by_order_id(
    order_id: &OrderId,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, StorageError> {
    let order = sqlx::query_as(r#"SELECT * FROM orders WHERE order_id = $1"#)
        .bind(order_id.clone())
        .fetch_optional(conn)
        .await?;
    Ok(order)
}

pub async fn fetch_orders_for_user(user_id: i64, conn: &mut SqliteConnection) -> Result<Vec<Order>, StorageError> {
    let orders = sqlx::query_as(r#"SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at DESC"#)
        .bind(user_id)
        .fetch_all(conn)
        .await?;
    Ok(orders)
}

/// Flip the unpaid order matching the QR fingerprint to `PAID`. The status
/// guard in the WHERE clause makes the update idempotent; a second
/// notification for the same fingerprint matches no rows.
pub async fn mark_paid_by_fingerprint(
    fingerprint: &str,
    payment_response: &str,
    paid_at: DateTime<FixedOffset>,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, StorageError> {
    let order = sqlx::query_as::<_, Order>(
        r#"UPDATE orders SET status = $1, payment_response = $2, paid_at = $3
           WHERE md5 = $4 AND status = $5 RETURNING *"#,
    )
    .bind(OrderStatusType::Paid)
    .bind(payment_response)
    .bind(paid_at)
    .bind(fingerprint)
    .bind(OrderStatusType::Unpaid)
    .fetch_optional(conn)
    .await?;
    Ok(order)
}
