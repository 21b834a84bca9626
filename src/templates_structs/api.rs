use serde::{Deserialize, Serialize};

use crate::models::talk::Talk;
use crate::models::talk_url::TalkUrl;

/// Generic paginated response wrapper for API endpoints.
#[derive(Serialize, Debug, Clone)]
pub struct PaginatedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiTalkResponse {
    pub id: i64,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub status: String,
    pub corresponding_author_id: i64,
    pub talk_type_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Talk> for ApiTalkResponse {
    fn from(t: Talk) -> Self {
        ApiTalkResponse {
            id: t.id,
            title: t.title,
            abstract_text: t.abstract_text,
            status: t.status.as_str().to_string(),
            corresponding_author_id: t.corresponding_author_id,
            talk_type_id: t.talk_type_id,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Create/update talk request for the API (privileged writers only).
#[derive(Deserialize, Debug)]
pub struct ApiTalkRequest {
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub talk_type_id: Option<i64>,
    /// Optional status override; defaults to under_consideration on create
    /// and to the stored status on update.
    #[serde(default)]
    pub status: Option<String>,
    /// Create only; defaults to the acting user.
    #[serde(default)]
    pub corresponding_author_id: Option<i64>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiTalkUrlResponse {
    pub id: i64,
    pub talk_id: i64,
    pub url: String,
    pub description: String,
}

impl From<TalkUrl> for ApiTalkUrlResponse {
    fn from(u: TalkUrl) -> Self {
        ApiTalkUrlResponse {
            id: u.id,
            talk_id: u.talk_id,
            url: u.url,
            description: u.description,
        }
    }
}

/// Create/update talk URL request. A client-supplied `talk_id` is ignored:
/// the parent id always comes from the URL path.
#[derive(Deserialize, Debug)]
pub struct ApiTalkUrlRequest {
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub talk_id: Option<i64>,
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
