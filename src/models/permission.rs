use sqlx::PgPool;

use crate::errors::AppError;

/// Aggregate permission codes across every role assigned to the user.
pub async fn find_codes_by_user_id(pool: &PgPool, user_id: i64) -> Result<Vec<String>, AppError> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT DISTINCT rp.code \
         FROM role_permissions rp \
         JOIN user_roles ur ON ur.role_id = rp.role_id \
         WHERE ur.user_id = $1 \
         ORDER BY rp.code",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|r| r.0).collect())
}
