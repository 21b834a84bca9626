use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::session::current_actor;
use crate::errors::{AppError, render};
use crate::models::talk;
use crate::templates_structs::{PageContext, TalkListTemplate};

const PAGE_SIZE: i64 = 25;

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

pub async fn list(
    pool: web::Data<PgPool>,
    session: Session,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let actor = current_actor(&session);
    let page = query.page.unwrap_or(1).max(1);

    let talk_page = talk::find_page(&pool, &actor, page, PAGE_SIZE).await?;
    let ctx = PageContext::build(&session, &pool).await?;
    render(TalkListTemplate { ctx, talk_page })
}
