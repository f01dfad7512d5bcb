use log::trace;
use sqlx::SqliteConnection;

use crate::db_types::ItemPrice;
use crate::traits::StorageError;

/// Insert catalog items, skipping any (item_id, game) pair that already
/// exists. Returns the number of rows actually inserted.
pub async fn seed_items(items: &[ItemPrice], conn: &mut SqliteConnection) -> Result<usize, StorageError> {
    let mut inserted = 0usize;
    for item in items {
        let res = sqlx::query(
            r#"INSERT OR IGNORE INTO item_prices (item_id, game, normal_price, reseller_price)
               VALUES ($1, $2, $3, $4)"#,
        )
        .bind(&item.item_id)
        .bind(&item.game)
        .bind(item.normal_price)
        .bind(item.reseller_price)
        .execute(&mut *conn)
        .await?;
        inserted += res.rows_affected() as usize;
    }
    trace!("🗃️ Seeded {inserted} of {} catalog items", items.len());
    Ok(inserted)
}

pub async fn items_for_game(game: &str, conn: &mut SqliteConnection) -> Result<Vec<ItemPrice>, StorageError> {
    let items = sqlx::query_as(
        r#"SELECT item_id, game, normal_price, reseller_price
           FROM item_prices WHERE game = $1 ORDER BY item_id"#,
    )
    .bind(game)
    .fetch_all(conn)
    .await?;
    Ok(items)
}

pub async fn fetch_item(
    game: &str,
    item_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<ItemPrice>, StorageError> {
    let item = sqlx::query_as(
        r#"SELECT item_id, game, normal_price, reseller_price
           FROM item_prices WHERE game = $1 AND item_id = $2"#,
    )
    .bind(game)
    .bind(item_id)
    .fetch_optional(conn)
    .await?;
    Ok(item)
}
