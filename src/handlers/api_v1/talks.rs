use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::policy;
use crate::auth::session::{current_actor, get_user_id, require_permission};
use crate::auth::validate;
use crate::errors::AppError;
use crate::models::talk::{self, NewTalk, TalkStatus};
use crate::models::{talk_type, user};
use crate::templates_structs::{
    ApiErrorResponse, ApiTalkRequest, ApiTalkResponse, PaginatedResponse,
};

fn bad_request(errors: Vec<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiErrorResponse {
        error: "Validation failed".to_string(),
        details: Some(errors.join("; ")),
    })
}

/// GET /api/v1/talks - List talks visible to the requester.
/// Anonymous: accepted/cancelled. Privileged reviewers: everything.
/// Other authenticated users: accepted/cancelled plus their own talks.
/// Query params: page (default 1), per_page (default 25, cap 100).
pub async fn list(
    pool: web::Data<PgPool>,
    session: Session,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let actor = current_actor(&session);

    let page = query
        .get("page")
        .and_then(|p| p.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);
    let per_page = query
        .get("per_page")
        .and_then(|p| p.parse::<i64>().ok())
        .unwrap_or(25)
        .clamp(1, 100);

    let talk_page = talk::find_for_api(&pool, &actor, page, per_page).await?;

    let response = PaginatedResponse {
        items: talk_page
            .talks
            .into_iter()
            .map(ApiTalkResponse::from)
            .collect::<Vec<_>>(),
        page: talk_page.page,
        per_page: talk_page.per_page,
        total: talk_page.total_count,
    };
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/talks/{id} - Retrieve a single talk. Non-visible talks are
/// reported as missing rather than forbidden.
pub async fn read(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let actor = current_actor(&session);
    let id = path.into_inner();

    let talk = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !policy::can_view(&actor, talk.status, talk.corresponding_author_id) {
        return Err(AppError::NotFound);
    }
    Ok(HttpResponse::Ok().json(ApiTalkResponse::from(talk)))
}

/// Validate the shared fields of an API talk payload.
async fn validate_payload(
    pool: &PgPool,
    body: &ApiTalkRequest,
) -> Result<(Vec<String>, Option<TalkStatus>), AppError> {
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_title(&body.title));
    errors.extend(validate::validate_optional(&body.abstract_text, "Abstract", 4000));

    if let Some(id) = body.talk_type_id {
        let types = talk_type::find_all(pool).await?;
        if !types.iter().any(|t| t.id == id) {
            errors.push("Unknown talk type".to_string());
        }
    }

    let status = match &body.status {
        Some(s) => match TalkStatus::parse(s) {
            Some(status) => Some(status),
            None => {
                errors.push(format!("Unknown status '{s}'"));
                None
            }
        },
        None => None,
    };
    Ok((errors, status))
}

/// POST /api/v1/talks - Create a talk. Privileged writers only.
pub async fn create(
    pool: web::Data<PgPool>,
    session: Session,
    body: web::Json<ApiTalkRequest>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, policy::PERM_EDIT_ALL)?;
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::PermissionDenied(policy::PERM_EDIT_ALL.to_string()))?;

    let (mut errors, status) = validate_payload(&pool, &body).await?;
    let corresponding_author_id = body.corresponding_author_id.unwrap_or(user_id);
    if !user::exists(&pool, corresponding_author_id).await? {
        errors.push("Unknown corresponding author".to_string());
    }
    if !errors.is_empty() {
        return Ok(bad_request(errors));
    }

    let new = NewTalk {
        title: body.title.trim().to_string(),
        abstract_text: body.abstract_text.trim().to_string(),
        status: status.unwrap_or(TalkStatus::UnderConsideration),
        corresponding_author_id,
        talk_type_id: body.talk_type_id,
    };

    let mut tx = pool.begin().await?;
    let talk_id = talk::create(&mut tx, &new).await?;
    talk::set_authors(&mut tx, talk_id, &[corresponding_author_id]).await?;
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk.created",
        "talk",
        talk_id,
        serde_json::json!({
            "title": new.title,
            "summary": "Talk Created"
        }),
    )
    .await?;
    tx.commit().await?;

    let created = talk::find_display_by_id(&pool, talk_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(ApiTalkResponse::from(created)))
}

/// PUT /api/v1/talks/{id} - Update a talk. Privileged writers only.
pub async fn update(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<ApiTalkRequest>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, policy::PERM_EDIT_ALL)?;
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::PermissionDenied(policy::PERM_EDIT_ALL.to_string()))?;

    let id = path.into_inner();
    let existing = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let (errors, status) = validate_payload(&pool, &body).await?;
    if !errors.is_empty() {
        return Ok(bad_request(errors));
    }

    let mut tx = pool.begin().await?;
    talk::update(
        &mut tx,
        id,
        body.title.trim(),
        body.abstract_text.trim(),
        body.talk_type_id,
        Some(status.unwrap_or(existing.status)),
    )
    .await?;
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk.modified",
        "talk",
        id,
        serde_json::json!({
            "title": body.title.trim(),
            "summary": "Talk Modified"
        }),
    )
    .await?;
    tx.commit().await?;

    let updated = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiTalkResponse::from(updated)))
}

/// DELETE /api/v1/talks/{id} - Delete a talk. Privileged writers only.
pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    require_permission(&session, policy::PERM_EDIT_ALL)?;
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::PermissionDenied(policy::PERM_EDIT_ALL.to_string()))?;

    let id = path.into_inner();
    if !talk::exists(&pool, id).await? {
        return Err(AppError::NotFound);
    }

    let mut tx = pool.begin().await?;
    talk::delete(&mut tx, id).await?;
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk.deleted",
        "talk",
        id,
        serde_json::json!({}),
    )
    .await?;
    tx.commit().await?;

    Ok(HttpResponse::NoContent().finish())
}
