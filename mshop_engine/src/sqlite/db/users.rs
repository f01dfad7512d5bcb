use sqlx::SqliteConnection;

use crate::db_types::User;
use crate::traits::StorageError;

pub async fn fetch_user(user_id: i64, conn: &mut SqliteConnection) -> Result<Option<User>, StorageError> {
    let user = sqlx::query_as(
        r#"SELECT user_id, username, balance, is_reseller FROM users WHERE user_id = $1"#,
    )
    .bind(user_id)
    .fetch_optional(conn)
    .await?;
    Ok(user)
}
