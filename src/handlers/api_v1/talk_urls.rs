use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::policy;
use crate::auth::session::{get_user_id, require_permission};
use crate::auth::validate;
use crate::errors::AppError;
use crate::models::{talk, talk_url};
use crate::models::talk_url::NewTalkUrl;
use crate::templates_structs::{ApiErrorResponse, ApiTalkUrlRequest, ApiTalkUrlResponse};

/// The parent talk must exist before anything else is considered,
/// authentication included.
async fn require_parent(pool: &PgPool, talk_id: i64) -> Result<(), AppError> {
    if talk::exists(pool, talk_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

fn require_authenticated(session: &Session) -> Result<i64, AppError> {
    get_user_id(session)
        .ok_or_else(|| AppError::PermissionDenied("authentication required".to_string()))
}

fn validate_payload(body: &ApiTalkUrlRequest) -> Vec<String> {
    let mut errors: Vec<String> = vec![];
    errors.extend(validate::validate_url(&body.url));
    errors.extend(validate::validate_optional(&body.description, "Description", 200));
    errors
}

/// GET /api/v1/talks/{talk_id}/urls - List a talk's URLs.
pub async fn list(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let talk_id = path.into_inner();
    require_parent(&pool, talk_id).await?;
    require_authenticated(&session)?;

    let urls = talk_url::find_all_for_talk(&pool, talk_id).await?;
    let items: Vec<ApiTalkUrlResponse> = urls.into_iter().map(ApiTalkUrlResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/v1/talks/{talk_id}/urls/{id} - Retrieve a single URL record.
pub async fn read(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (talk_id, id) = path.into_inner();
    require_parent(&pool, talk_id).await?;
    require_authenticated(&session)?;

    let url = talk_url::find_by_id(&pool, talk_id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiTalkUrlResponse::from(url)))
}

/// POST /api/v1/talks/{talk_id}/urls - Attach a URL to the parent talk.
/// The parent id comes from the path; any `talk_id` in the payload is
/// overridden.
pub async fn create(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<ApiTalkUrlRequest>,
) -> Result<HttpResponse, AppError> {
    let talk_id = path.into_inner();
    require_parent(&pool, talk_id).await?;
    require_permission(&session, policy::PERM_EDIT_ALL)?;
    let user_id = require_authenticated(&session)?;

    let errors = validate_payload(&body);
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Validation failed".to_string(),
            details: Some(errors.join("; ")),
        }));
    }

    let new = NewTalkUrl {
        url: body.url.trim().to_string(),
        description: body.description.trim().to_string(),
    };

    let mut tx = pool.begin().await?;
    let id = talk_url::create(&mut tx, talk_id, &new).await?;
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk_url.created",
        "talk_url",
        id,
        serde_json::json!({
            "talk_id": talk_id,
            "url": new.url
        }),
    )
    .await?;
    tx.commit().await?;

    let created = talk_url::find_by_id(&pool, talk_id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(ApiTalkUrlResponse::from(created)))
}

/// PUT /api/v1/talks/{talk_id}/urls/{id} - Update a URL record. The
/// parent id from the path wins over any client-supplied value.
pub async fn update(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<(i64, i64)>,
    body: web::Json<ApiTalkUrlRequest>,
) -> Result<HttpResponse, AppError> {
    let (talk_id, id) = path.into_inner();
    require_parent(&pool, talk_id).await?;
    require_permission(&session, policy::PERM_EDIT_ALL)?;
    let user_id = require_authenticated(&session)?;

    let errors = validate_payload(&body);
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Validation failed".to_string(),
            details: Some(errors.join("; ")),
        }));
    }

    let new = NewTalkUrl {
        url: body.url.trim().to_string(),
        description: body.description.trim().to_string(),
    };

    let mut tx = pool.begin().await?;
    if !talk_url::update(&mut tx, talk_id, id, &new).await? {
        return Err(AppError::NotFound);
    }
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk_url.modified",
        "talk_url",
        id,
        serde_json::json!({
            "talk_id": talk_id,
            "url": new.url
        }),
    )
    .await?;
    tx.commit().await?;

    let updated = talk_url::find_by_id(&pool, talk_id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiTalkUrlResponse::from(updated)))
}

/// DELETE /api/v1/talks/{talk_id}/urls/{id} - Remove a URL record.
pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (talk_id, id) = path.into_inner();
    require_parent(&pool, talk_id).await?;
    require_permission(&session, policy::PERM_EDIT_ALL)?;
    let user_id = require_authenticated(&session)?;

    let mut tx = pool.begin().await?;
    if !talk_url::delete(&mut tx, talk_id, id).await? {
        return Err(AppError::NotFound);
    }
    crate::audit::log(
        &mut *tx,
        user_id,
        "talk_url.deleted",
        "talk_url",
        id,
        serde_json::json!({}),
    )
    .await?;
    tx.commit().await?;

    Ok(HttpResponse::NoContent().finish())
}
