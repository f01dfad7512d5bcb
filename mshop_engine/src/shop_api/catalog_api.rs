use std::fmt::Debug;

use mshop_common::UsdAmount;

use crate::db_types::{ItemPrice, GAME_FF, GAME_MLBB};
use crate::traits::{CatalogManagement, StorageError};

/// Storefront view of the catalog.
#[derive(Clone)]
pub struct CatalogApi<B> {
    db: B,
}

impl<B: Debug> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi ({:?})", self.db)
    }
}

impl<B> CatalogApi<B>
where
    B: CatalogManagement,
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Make sure the stock diamond packs exist. Prices that an operator has
    /// already customised in the database are left untouched.
    pub async fn seed_defaults(&self) -> Result<usize, StorageError> {
        self.db.seed_catalog(&default_catalog()).await
    }

    pub async fn item_prices(&self, game: &str) -> Result<Vec<ItemPrice>, StorageError> {
        self.db.item_prices_for_game(game).await
    }

    pub async fn is_reseller(&self, user_id: i64) -> Result<bool, StorageError> {
        self.db.is_reseller(user_id).await
    }
}

/// The stock catalog. Item ids are historical and must not be renamed, since
/// customers' order records reference them.
pub fn default_catalog() -> Vec<ItemPrice> {
    vec![
        ItemPrice::new("86_DIAMOND", GAME_MLBB, UsdAmount::from_cents(3), UsdAmount::from_cents(3)),
        ItemPrice::new("172_DIAMAND", GAME_MLBB, UsdAmount::from_cents(3), UsdAmount::from_cents(3)),
        ItemPrice::new("344_DIAMOND", GAME_MLBB, UsdAmount::from_cents(640), UsdAmount::from_cents(560)),
        ItemPrice::new("429_DIAMOND", GAME_MLBB, UsdAmount::from_cents(800), UsdAmount::from_cents(700)),
        ItemPrice::new("50_DIAMOND", GAME_FF, UsdAmount::from_cents(100), UsdAmount::from_cents(85)),
        ItemPrice::new("100_DIAMOND", GAME_FF, UsdAmount::from_cents(200), UsdAmount::from_cents(170)),
    ]
}
