use sqlx::PgPool;

/// Read a runtime setting, falling back to `default` when the key is
/// missing or the lookup fails.
pub async fn get_value(pool: &PgPool, key: &str, default: &str) -> String {
    let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await
        .ok()
        .flatten();
    row.map(|r| r.0).unwrap_or_else(|| default.to_string())
}

/// Global submission-open flag. Defaults to open when unset.
pub async fn talks_open(pool: &PgPool) -> bool {
    get_value(pool, "talks.open", "true").await == "true"
}
