// Template context structures for Askama templates, organized by domain.

use actix_session::Session;
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::session::{Permissions, get_permissions, get_username, take_flash};
use crate::errors::AppError;
use crate::models::setting;

/// Common context shared by all pages. Talk listings and the speaker
/// roster are public, so `username` is optional; anonymous visitors carry
/// an empty permission set.
pub struct PageContext {
    pub username: Option<String>,
    pub permissions: Permissions,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub async fn build(session: &Session, pool: &PgPool) -> Result<Self, AppError> {
        let username = get_username(session);
        let permissions = get_permissions(session);
        let flash = take_flash(session);
        let app_name = setting::get_value(pool, "app.name", "Podium").await;
        let csrf_token = csrf::get_or_create_token(session);
        Ok(Self {
            username,
            permissions,
            flash,
            app_name,
            csrf_token,
        })
    }
}

mod api;
mod audit;
mod common;
mod speaker;
mod talk;

pub use self::api::{
    ApiErrorResponse, ApiTalkRequest, ApiTalkResponse, ApiTalkUrlRequest, ApiTalkUrlResponse,
    PaginatedResponse,
};
pub use self::audit::AuditListTemplate;
pub use self::common::LoginTemplate;
pub use self::speaker::SpeakersTemplate;
pub use self::talk::{
    TalkDeleteTemplate, TalkDetailTemplate, TalkFormTemplate, TalkFormValues, TalkListTemplate,
    TalkTypeOption, talk_type_options,
};
