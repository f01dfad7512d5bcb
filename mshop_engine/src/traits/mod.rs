//! The traits that a storage backend must implement to drive the shop, plus
//! the contract for payment QR generation.
//!
//! [`CatalogManagement`] covers the item catalog and user lookups, while
//! [`OrderManagement`] covers the order lifecycle. [`ShopDatabase`] is a
//! convenience alias for backends that implement both.

mod catalog_management;
mod order_management;
mod payment_qr;

use thiserror::Error;

use crate::db_types::OrderId;

pub use catalog_management::CatalogManagement;
pub use order_management::OrderManagement;
pub use payment_qr::{PaymentQr, PaymentQrGenerator, QrGenerationError};

/// A complete storage backend for the shop.
pub trait ShopDatabase: Clone + CatalogManagement + OrderManagement {}
impl<T: Clone + CatalogManagement + OrderManagement> ShopDatabase for T {}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("An order with id {0} already exists")]
    DuplicateOrderId(OrderId),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}
