use sqlx::{PgConnection, PgPool};

use super::types::{NewTalk, Talk, TalkAuthor, TalkPage, TalkStatus};
use crate::auth::policy::Actor;
use crate::errors::AppError;

/// SQL for talk display: talk + corresponding author + talk type name.
const SELECT_TALK: &str = "\
    SELECT t.id, t.title, t.abstract AS abstract_text, t.status, \
           t.corresponding_author_id, \
           u.username AS author_username, \
           u.first_name AS author_first_name, \
           u.last_name AS author_last_name, \
           t.talk_type_id, tt.name AS talk_type_name, \
           t.created_at, t.updated_at \
    FROM talks t \
    JOIN users u ON u.id = t.corresponding_author_id \
    LEFT JOIN talk_types tt ON tt.id = t.talk_type_id";

const UPDATED_AT: &str = "to_char(now() AT TIME ZONE 'utc', 'YYYY-MM-DD\"T\"HH24:MI:SS')";

#[derive(sqlx::FromRow)]
struct TalkRow {
    id: i64,
    title: String,
    abstract_text: String,
    status: String,
    corresponding_author_id: i64,
    author_username: String,
    author_first_name: String,
    author_last_name: String,
    talk_type_id: Option<i64>,
    talk_type_name: Option<String>,
    created_at: String,
    updated_at: String,
}

fn row_to_talk(row: TalkRow) -> Talk {
    Talk {
        id: row.id,
        title: row.title,
        abstract_text: row.abstract_text,
        status: TalkStatus::parse(&row.status).unwrap_or(TalkStatus::UnderConsideration),
        corresponding_author_id: row.corresponding_author_id,
        corresponding_author_name: crate::models::user::full_name(
            &row.author_first_name,
            &row.author_last_name,
            &row.author_username,
        ),
        talk_type_id: row.talk_type_id,
        talk_type_name: row.talk_type_name.unwrap_or_default(),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// WHERE fragment for what `actor` may see. `include_own` additionally
/// includes the actor's own talks regardless of status (REST list
/// semantics). The optional author-id bind is numbered `first_param`.
fn visibility_clause(actor: &Actor, include_own: bool, first_param: usize) -> (String, Option<i64>) {
    if actor.can_view_all() {
        return ("TRUE".to_string(), None);
    }
    match (include_own, actor.user_id) {
        (true, Some(uid)) => (
            format!(
                "(t.status IN ('accepted', 'cancelled') OR t.corresponding_author_id = ${first_param})"
            ),
            Some(uid),
        ),
        _ => ("t.status IN ('accepted', 'cancelled')".to_string(), None),
    }
}

async fn fetch_page(
    pool: &PgPool,
    actor: &Actor,
    include_own: bool,
    page: i64,
    per_page: i64,
) -> Result<TalkPage, AppError> {
    let page = page.max(1);
    let per_page = per_page.clamp(1, 100);
    let offset = (page - 1) * per_page;

    let (where_clause, owner) = visibility_clause(actor, include_own, 1);

    let count_sql = format!("SELECT COUNT(*) FROM talks t WHERE {where_clause}");
    let mut count_q = sqlx::query_as::<_, (i64,)>(&count_sql);
    if let Some(uid) = owner {
        count_q = count_q.bind(uid);
    }
    let (total_count,) = count_q.fetch_one(pool).await?;

    let n = if owner.is_some() { 1 } else { 0 };
    let data_sql = format!(
        "{SELECT_TALK} WHERE {where_clause} ORDER BY t.id LIMIT ${} OFFSET ${}",
        n + 1,
        n + 2
    );
    let mut data_q = sqlx::query_as::<_, TalkRow>(&data_sql);
    if let Some(uid) = owner {
        data_q = data_q.bind(uid);
    }
    let rows = data_q.bind(per_page).bind(offset).fetch_all(pool).await?;

    let talks = rows.into_iter().map(row_to_talk).collect();
    let total_pages = ((total_count as f64) / (per_page as f64)).ceil() as i64;
    Ok(TalkPage {
        talks,
        page,
        per_page,
        total_count,
        total_pages,
    })
}

/// Talks for the public list view: everything for privileged reviewers,
/// accepted/cancelled for everyone else. Ordered by id.
pub async fn find_page(
    pool: &PgPool,
    actor: &Actor,
    page: i64,
    per_page: i64,
) -> Result<TalkPage, AppError> {
    fetch_page(pool, actor, false, page, per_page).await
}

/// Talks for the REST list: like `find_page`, but authenticated
/// non-privileged actors also see their own talks regardless of status.
pub async fn find_for_api(
    pool: &PgPool,
    actor: &Actor,
    page: i64,
    per_page: i64,
) -> Result<TalkPage, AppError> {
    fetch_page(pool, actor, true, page, per_page).await
}

pub async fn find_display_by_id(pool: &PgPool, id: i64) -> Result<Option<Talk>, AppError> {
    let sql = format!("{SELECT_TALK} WHERE t.id = $1");
    let row = sqlx::query_as::<_, TalkRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(row_to_talk))
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let (found,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM talks WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found)
}

/// All listed authors of a talk, corresponding author included.
pub async fn find_authors(pool: &PgPool, talk_id: i64) -> Result<Vec<TalkAuthor>, AppError> {
    let authors = sqlx::query_as::<_, TalkAuthor>(
        "SELECT u.id, u.username, u.first_name, u.last_name \
         FROM talk_authors ta \
         JOIN users u ON u.id = ta.user_id \
         WHERE ta.talk_id = $1 \
         ORDER BY u.username",
    )
    .bind(talk_id)
    .fetch_all(pool)
    .await?;
    Ok(authors)
}

pub async fn create(conn: &mut PgConnection, new: &NewTalk) -> Result<i64, AppError> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO talks (title, abstract, status, corresponding_author_id, talk_type_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&new.title)
    .bind(&new.abstract_text)
    .bind(new.status.as_str())
    .bind(new.corresponding_author_id)
    .bind(new.talk_type_id)
    .fetch_one(&mut *conn)
    .await?;
    Ok(id)
}

/// Replace the author set of a talk.
pub async fn set_authors(
    conn: &mut PgConnection,
    talk_id: i64,
    author_ids: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM talk_authors WHERE talk_id = $1")
        .bind(talk_id)
        .execute(&mut *conn)
        .await?;
    for user_id in author_ids {
        sqlx::query(
            "INSERT INTO talk_authors (talk_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(talk_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

/// Update a talk's submitted fields. `status` is only set when given
/// (the REST API lets privileged managers change it; the web form never
/// does).
pub async fn update(
    conn: &mut PgConnection,
    id: i64,
    title: &str,
    abstract_text: &str,
    talk_type_id: Option<i64>,
    status: Option<TalkStatus>,
) -> Result<(), AppError> {
    if let Some(status) = status {
        let sql = format!(
            "UPDATE talks SET title = $1, abstract = $2, talk_type_id = $3, status = $4, \
             updated_at = {UPDATED_AT} WHERE id = $5"
        );
        sqlx::query(&sql)
            .bind(title)
            .bind(abstract_text)
            .bind(talk_type_id)
            .bind(status.as_str())
            .bind(id)
            .execute(&mut *conn)
            .await?;
    } else {
        let sql = format!(
            "UPDATE talks SET title = $1, abstract = $2, talk_type_id = $3, \
             updated_at = {UPDATED_AT} WHERE id = $4"
        );
        sqlx::query(&sql)
            .bind(title)
            .bind(abstract_text)
            .bind(talk_type_id)
            .bind(id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// Delete a talk (authors and URLs cascade via FK).
pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM talks WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
