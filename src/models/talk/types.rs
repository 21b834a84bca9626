use serde::Deserialize;

/// Talk lifecycle states. Transitions are driven by programme committee
/// tooling outside this application; here the status only gates visibility
/// and edit rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkStatus {
    UnderConsideration,
    Accepted,
    Rejected,
    Cancelled,
    Withdrawn,
    Provisional,
}

impl TalkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TalkStatus::UnderConsideration => "under_consideration",
            TalkStatus::Accepted => "accepted",
            TalkStatus::Rejected => "rejected",
            TalkStatus::Cancelled => "cancelled",
            TalkStatus::Withdrawn => "withdrawn",
            TalkStatus::Provisional => "provisional",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "under_consideration" => Some(TalkStatus::UnderConsideration),
            "accepted" => Some(TalkStatus::Accepted),
            "rejected" => Some(TalkStatus::Rejected),
            "cancelled" => Some(TalkStatus::Cancelled),
            "withdrawn" => Some(TalkStatus::Withdrawn),
            "provisional" => Some(TalkStatus::Provisional),
            _ => None,
        }
    }

    /// Accepted and cancelled talks are public record; everything else is
    /// visible only to the corresponding author and privileged reviewers.
    pub fn is_public(self) -> bool {
        matches!(self, TalkStatus::Accepted | TalkStatus::Cancelled)
    }

    pub fn label(self) -> &'static str {
        match self {
            TalkStatus::UnderConsideration => "Under consideration",
            TalkStatus::Accepted => "Accepted",
            TalkStatus::Rejected => "Rejected",
            TalkStatus::Cancelled => "Cancelled",
            TalkStatus::Withdrawn => "Withdrawn",
            TalkStatus::Provisional => "Provisional",
        }
    }
}

/// Display form of a talk — joined with the corresponding author's name and
/// the talk type name.
#[derive(Debug, Clone)]
pub struct Talk {
    pub id: i64,
    pub title: String,
    pub abstract_text: String,
    pub status: TalkStatus,
    pub corresponding_author_id: i64,
    pub corresponding_author_name: String,
    pub talk_type_id: Option<i64>,
    pub talk_type_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Pagination metadata for the talk list.
pub struct TalkPage {
    pub talks: Vec<Talk>,
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

/// New talk data for creation.
pub struct NewTalk {
    pub title: String,
    pub abstract_text: String,
    pub status: TalkStatus,
    pub corresponding_author_id: i64,
    pub talk_type_id: Option<i64>,
}

/// One listed author of a talk (corresponding author included).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TalkAuthor {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl TalkAuthor {
    pub fn full_name(&self) -> String {
        crate::models::user::full_name(&self.first_name, &self.last_name, &self.username)
    }
}

/// Form data from the submit/edit talk forms. `talk_type_id` and `authors`
/// arrive as raw strings and are resolved by the handler.
#[derive(Debug, Deserialize)]
pub struct TalkForm {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub talk_type_id: String,
    #[serde(default)]
    pub authors: String,
    pub csrf_token: String,
}
