use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::AppError;

/// One row of the audit trail, joined with the acting user's name for display.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuditEntry {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub action: String,
    pub target_type: String,
    pub target_id: i64,
    pub details: String,
    pub created_at: String,
}

/// Record an audit entry. Accepts either a pool or an open transaction, so
/// callers that mutate data can commit the entry atomically with the
/// mutation itself.
pub async fn log<'e, E>(
    executor: E,
    user_id: i64,
    action: &str,
    target_type: &str,
    target_id: i64,
    details: Value,
) -> Result<(), AppError>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO audit_log (user_id, action, target_type, target_id, details, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(user_id)
    .bind(action)
    .bind(target_type)
    .bind(target_id)
    .bind(details.to_string())
    .bind(Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string())
    .execute(executor)
    .await?;
    Ok(())
}

/// Most recent audit entries, newest first.
pub async fn find_recent(pool: &PgPool, limit: i64) -> Result<Vec<AuditEntry>, AppError> {
    let entries = sqlx::query_as::<_, AuditEntry>(
        "SELECT a.id, a.user_id, COALESCE(u.username, '') AS username, \
                a.action, a.target_type, a.target_id, a.details, a.created_at \
         FROM audit_log a \
         LEFT JOIN users u ON u.id = a.user_id \
         ORDER BY a.id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}
