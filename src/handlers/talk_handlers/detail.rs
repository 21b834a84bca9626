use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::policy;
use crate::auth::session::current_actor;
use crate::errors::{AppError, render};
use crate::models::{talk, talk_url};
use crate::templates_structs::{PageContext, TalkDetailTemplate};

pub async fn detail(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let actor = current_actor(&session);

    let talk = talk::find_display_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    if !policy::can_view(&actor, talk.status, talk.corresponding_author_id) {
        return Err(AppError::PermissionDenied("talks.view".to_string()));
    }
    let can_edit = policy::can_edit(&actor, talk.status, talk.corresponding_author_id);

    let authors = talk::find_authors(&pool, id).await?;
    let urls = talk_url::find_all_for_talk(&pool, id).await?;
    let ctx = PageContext::build(&session, &pool).await?;
    render(TalkDetailTemplate {
        ctx,
        talk,
        authors,
        urls,
        can_edit,
    })
}
