use crate::db_types::ItemPrice;
use crate::traits::StorageError;

/// Read and seed access to the item catalog, plus the user lookups the
/// storefront needs.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    /// Insert the given items into the catalog, skipping any item that is
    /// already present. Existing prices are never overwritten.
    async fn seed_catalog(&self, items: &[ItemPrice]) -> Result<usize, StorageError>;

    /// All items for the given game code, ordered by item id.
    async fn item_prices_for_game(&self, game: &str) -> Result<Vec<ItemPrice>, StorageError>;

    /// Look up a single item. Returns `None` when the (game, item) pair is not
    /// in the catalog.
    async fn fetch_item(&self, game: &str, item_id: &str) -> Result<Option<ItemPrice>, StorageError>;

    /// Whether the given user is on the reseller price tier. Unknown users are
    /// not resellers.
    async fn is_reseller(&self, user_id: i64) -> Result<bool, StorageError>;
}
