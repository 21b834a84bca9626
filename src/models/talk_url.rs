use sqlx::{PgConnection, PgPool};

use crate::errors::AppError;

/// A URL attached to a talk (slides, video, repository). Managed only
/// through the talk's own nested REST resource.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TalkUrl {
    pub id: i64,
    pub talk_id: i64,
    pub url: String,
    pub description: String,
}

pub struct NewTalkUrl {
    pub url: String,
    pub description: String,
}

pub async fn find_all_for_talk(pool: &PgPool, talk_id: i64) -> Result<Vec<TalkUrl>, AppError> {
    let urls = sqlx::query_as::<_, TalkUrl>(
        "SELECT id, talk_id, url, description FROM talk_urls WHERE talk_id = $1 ORDER BY id",
    )
    .bind(talk_id)
    .fetch_all(pool)
    .await?;
    Ok(urls)
}

/// Lookup scoped to the parent talk, so a URL id can never be addressed
/// through another talk's path.
pub async fn find_by_id(pool: &PgPool, talk_id: i64, id: i64) -> Result<Option<TalkUrl>, AppError> {
    let url = sqlx::query_as::<_, TalkUrl>(
        "SELECT id, talk_id, url, description FROM talk_urls WHERE talk_id = $1 AND id = $2",
    )
    .bind(talk_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(url)
}

pub async fn create(
    conn: &mut PgConnection,
    talk_id: i64,
    new: &NewTalkUrl,
) -> Result<i64, AppError> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO talk_urls (talk_id, url, description) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(talk_id)
    .bind(&new.url)
    .bind(&new.description)
    .fetch_one(&mut *conn)
    .await?;
    Ok(id)
}

/// Returns false when no row matched the (talk, id) pair.
pub async fn update(
    conn: &mut PgConnection,
    talk_id: i64,
    id: i64,
    new: &NewTalkUrl,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE talk_urls SET url = $1, description = $2 WHERE talk_id = $3 AND id = $4",
    )
    .bind(&new.url)
    .bind(&new.description)
    .bind(talk_id)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(conn: &mut PgConnection, talk_id: i64, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM talk_urls WHERE talk_id = $1 AND id = $2")
        .bind(talk_id)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
