use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::session::{current_actor, get_user_id};
use crate::auth::{csrf, policy};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::talk;
use crate::templates_structs::{PageContext, TalkDeleteTemplate};

pub async fn confirm_delete(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let actor = current_actor(&session);

    let talk = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !policy::can_edit(&actor, talk.status, talk.corresponding_author_id) {
        return Err(AppError::PermissionDenied(policy::PERM_EDIT_ALL.to_string()));
    }

    let ctx = PageContext::build(&session, &pool).await?;
    render(TalkDeleteTemplate { ctx, talk })
}

pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id =
        get_user_id(&session).ok_or_else(|| AppError::Session("Not authenticated".to_string()))?;
    let actor = current_actor(&session);

    let id = path.into_inner();
    let talk = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !policy::can_edit(&actor, talk.status, talk.corresponding_author_id) {
        return Err(AppError::PermissionDenied(policy::PERM_EDIT_ALL.to_string()));
    }

    // No detail metadata on deletions.
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

    let _ = session.insert("flash", "Talk deleted");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/talks"))
        .finish())
}
