use thiserror::Error;

use crate::db_types::OrderId;
use crate::traits::StorageError;

#[derive(Debug, Error)]
pub enum OrderManagerError {
    #[error("No item {item_id} in the {game} catalog")]
    ItemNotFound { game: String, item_id: String },
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),
    #[error("Could not generate a payment QR code")]
    PaymentGenerationFailed,
    #[error("Could not allocate a unique order id after {0} attempts")]
    OrderIdAllocation(u32),
    #[error(transparent)]
    StorageError(#[from] StorageError),
}
