//! The MShop payment engine.
//!
//! This crate owns everything between the HTTP layer and the database:
//! the catalog of purchasable items, the order lifecycle (creation through
//! payment confirmation), and the SQLite storage backend.
//!
//! The design goal is to make the backend swappable. All storage access goes
//! through the traits in [`traits`], and the high-level APIs in [`shop_api`]
//! are generic over any type implementing them. [`SqliteDatabase`] is the
//! production implementation.

pub mod db_types;
pub mod shop_api;
mod sqlite;
pub mod traits;

pub use shop_api::{
    default_catalog, CatalogApi, CreatedOrder, OrderFlowApi, OrderManagerError, OrderQueryApi,
};
pub use sqlite::SqliteDatabase;
