use std::fmt::Debug;

use chrono::{DateTime, FixedOffset};
use log::debug;
use sqlx::SqlitePool;

use crate::db_types::{ItemPrice, NewOrder, Order, OrderId, User};
use crate::sqlite::db;
use crate::traits::{CatalogManagement, OrderManagement, StorageError};

/// The production storage backend, backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SqliteDatabase ({})", self.url)
    }
}

impl SqliteDatabase {
    /// Connect to the database named by `MSHOP_DATABASE_URL`, creating the
    /// file and schema on first use.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db::db_url();
        Self::new_with_url(&url, max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = db::new_pool(url, max_connections).await?;
        db::create_tables(&pool).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::from)?;
        db::users::fetch_user(user_id, &mut conn).await
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn seed_catalog(&self, items: &[ItemPrice]) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;
        let inserted = db::catalog::seed_items(items, &mut tx).await?;
        tx.commit().await.map_err(StorageError::from)?;
        debug!("🗃️ Catalog seeded. {inserted} new items");
        Ok(inserted)
    }

    async fn item_prices_for_game(&self, game: &str) -> Result<Vec<ItemPrice>, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::from)?;
        db::catalog::items_for_game(game, &mut conn).await
    }

    async fn fetch_item(&self, game: &str, item_id: &str) -> Result<Option<ItemPrice>, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::from)?;
        db::catalog::fetch_item(game, item_id, &mut conn).await
    }

    async fn is_reseller(&self, user_id: i64) -> Result<bool, StorageError> {
        let user = self.fetch_user(user_id).await?;
        Ok(user.map(|u| u.is_reseller).unwrap_or(false))
    }
}

impl OrderManagement for SqliteDatabase {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::from)?;
        db::orders::insert_order(order, &mut conn).await
    }

    async fn fetch_order_by_order_id(&self, order_id: &OrderId) -> Result<Option<Order>, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::from)?;
        db::orders::fetch_order_by_order_id(order_id, &mut conn).await
    }

    async fn orders_for_user(&self, user_id: i64) -> Result<Vec<Order>, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::from)?;
        db::orders::fetch_orders_for_user(user_id, &mut conn).await
    }

    async fn mark_paid_by_fingerprint(
        &self,
        fingerprint: &str,
        payment_response: &str,
        paid_at: DateTime<FixedOffset>,
    ) -> Result<Option<Order>, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::from)?;
        db::orders::mark_paid_by_fingerprint(fingerprint, payment_response, paid_at, &mut conn).await
    }
}
