use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::session::require_permission;
use crate::errors::{AppError, render};
use crate::templates_structs::{AuditListTemplate, PageContext};

pub async fn list(pool: web::Data<PgPool>, session: Session) -> Result<HttpResponse, AppError> {
    require_permission(&session, "audit.view")?;

    let entries = crate::audit::find_recent(&pool, 100).await?;
    let ctx = PageContext::build(&session, &pool).await?;
    render(AuditListTemplate { ctx, entries })
}
