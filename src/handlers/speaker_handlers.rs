use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::errors::{AppError, render};
use crate::models::speaker;
use crate::templates_structs::{PageContext, SpeakersTemplate};

/// Speakers are displayed four to a row.
const ROW_SIZE: usize = 4;

pub async fn speakers(
    pool: web::Data<PgPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let speakers = speaker::find_accepted(&pool).await?;
    let speaker_rows = speaker::by_row(speakers, ROW_SIZE);

    let ctx = PageContext::build(&session, &pool).await?;
    render(SpeakersTemplate { ctx, speaker_rows })
}
