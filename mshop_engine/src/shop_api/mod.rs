//! High-level shop APIs. These wrap a storage backend and expose the
//! operations the HTTP layer needs, without tying it to SQLite.

mod catalog_api;
mod errors;
mod order_flow_api;
mod order_query_api;

pub use catalog_api::{default_catalog, CatalogApi};
pub use errors::OrderManagerError;
pub use order_flow_api::{CreatedOrder, OrderFlowApi, MAX_ORDER_ID_ATTEMPTS};
pub use order_query_api::OrderQueryApi;
