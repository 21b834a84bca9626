use sqlx::PgPool;

use crate::errors::AppError;

/// Internal user struct for authentication — includes password hash.
/// Speaker-facing reads go through display queries instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// "First Last", falling back to the username when both name fields are
/// blank.
pub fn full_name(first_name: &str, last_name: &str, username: &str) -> String {
    let name = format!("{} {}", first_name.trim(), last_name.trim());
    let name = name.trim();
    if name.is_empty() {
        username.to_string()
    } else {
        name.to_string()
    }
}

/// Find user by username for authentication.
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password, email, first_name, last_name, created_at, updated_at \
         FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Resolve a username to an id — used for co-author lookups.
pub async fn find_id_by_username(pool: &PgPool, username: &str) -> Result<Option<i64>, AppError> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.0))
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let (found,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found)
}
