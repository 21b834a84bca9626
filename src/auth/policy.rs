//! Visibility and edit rules for talk records.
//!
//! Pure predicates over an [`Actor`] and a talk's status/ownership; callers
//! translate a `false` into a not-found or forbidden response. Accepted and
//! cancelled talks are public record (cancelled talks stay listed so
//! schedule changes remain visible); everything else is private to the
//! corresponding author and holders of `talks.view_all`.

use crate::auth::session::Permissions;
use crate::models::talk::TalkStatus;

/// Holders may view every talk regardless of status.
pub const PERM_VIEW_ALL: &str = "talks.view_all";
/// Holders may edit or delete any talk at any time, and may mutate talks
/// through the REST API.
pub const PERM_EDIT_ALL: &str = "talks.edit_all";

/// The acting identity of a request. `user_id` is `None` for anonymous
/// visitors, who also carry no permission codes.
#[derive(Debug, Clone, Default)]
pub struct Actor {
    pub user_id: Option<i64>,
    pub permissions: Permissions,
}

impl Actor {
    pub fn anonymous() -> Self {
        Actor::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn can_view_all(&self) -> bool {
        self.permissions.has(PERM_VIEW_ALL)
    }

    pub fn can_edit_all(&self) -> bool {
        self.permissions.has(PERM_EDIT_ALL)
    }
}

/// Whether `actor` may see a talk with the given status and corresponding
/// author. Public statuses are visible to everyone, including anonymous.
pub fn can_view(actor: &Actor, status: TalkStatus, corresponding_author_id: i64) -> bool {
    status.is_public()
        || actor.can_view_all()
        || actor.user_id == Some(corresponding_author_id)
}

/// Whether `actor` may edit or delete the talk. Owners may only touch
/// their talk while it is still under consideration; `talks.edit_all`
/// holders may touch any talk at any time.
pub fn can_edit(actor: &Actor, status: TalkStatus, corresponding_author_id: i64) -> bool {
    actor.can_edit_all()
        || (status == TalkStatus::UnderConsideration
            && actor.user_id == Some(corresponding_author_id))
}
