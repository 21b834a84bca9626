use sqlx::PgPool;

use crate::errors::AppError;

/// A corresponding author with at least one accepted talk.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Speaker {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl Speaker {
    pub fn full_name(&self) -> String {
        crate::models::user::full_name(&self.first_name, &self.last_name, &self.username)
    }
}

/// Distinct corresponding authors of accepted talks, sorted by name.
pub async fn find_accepted(pool: &PgPool) -> Result<Vec<Speaker>, AppError> {
    let speakers = sqlx::query_as::<_, Speaker>(
        "SELECT DISTINCT u.id, u.username, u.first_name, u.last_name \
         FROM users u \
         JOIN talks t ON t.corresponding_author_id = u.id \
         WHERE t.status = 'accepted' \
         ORDER BY u.first_name, u.last_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(speakers)
}

/// Partition a sorted speaker list into display rows of `n`; the last row
/// may be shorter.
pub fn by_row<T: Clone>(items: Vec<T>, n: usize) -> Vec<Vec<T>> {
    if n == 0 {
        return Vec::new();
    }
    items.chunks(n).map(|chunk| chunk.to_vec()).collect()
}
