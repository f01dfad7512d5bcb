//! SQLite implementation of the shop storage traits.

pub mod db;
mod sqlite_impl;

pub use sqlite_impl::SqliteDatabase;
