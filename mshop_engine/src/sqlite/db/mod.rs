//! Low-level database routines. Every function here takes an explicit
//! connection, so they compose under a transaction when the caller needs one.

pub mod catalog;
pub mod orders;
pub mod users;

use std::env;
use std::str::FromStr;

use log::{debug, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const SQLITE_DB_URL: &str = "sqlite://data/mshop.db";

pub fn db_url() -> String {
    env::var("MSHOP_DATABASE_URL").unwrap_or_else(|_| {
        warn!("🗃️ MSHOP_DATABASE_URL is not set. Using the default, {SQLITE_DB_URL}");
        SQLITE_DB_URL.to_string()
    })
}

/// Open a connection pool against the given sqlite url, creating the database
/// file if it does not exist yet.
pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    debug!("🗃️ Connected to database {url} with up to {max_connections} connections");
    Ok(pool)
}

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id     INTEGER PRIMARY KEY,
    username    TEXT,
    balance     INTEGER NOT NULL DEFAULT 0,
    is_reseller BOOLEAN NOT NULL DEFAULT 0
);"#;

const CREATE_ITEM_PRICES: &str = r#"
CREATE TABLE IF NOT EXISTS item_prices (
    item_id        TEXT NOT NULL,
    game           TEXT NOT NULL,
    normal_price   INTEGER NOT NULL,
    reseller_price INTEGER NOT NULL,
    PRIMARY KEY (item_id, game)
);"#;

const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_id         TEXT PRIMARY KEY,
    user_id          INTEGER NOT NULL,
    game             TEXT NOT NULL,
    item_id          TEXT NOT NULL,
    amount           INTEGER NOT NULL,
    server_id        TEXT NOT NULL,
    zone_id          TEXT NOT NULL,
    md5              TEXT NOT NULL,
    status           TEXT NOT NULL DEFAULT 'UNPAID',
    payment_response TEXT,
    created_at       TEXT NOT NULL,
    paid_at          TEXT
);"#;

/// Create the schema if it is not there already. Safe to call on every start.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in [CREATE_USERS, CREATE_ITEM_PRICES, CREATE_ORDERS] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
