//! Shared actor builders for policy tests.

use podium::auth::policy::{Actor, PERM_EDIT_ALL, PERM_VIEW_ALL};
use podium::auth::session::Permissions;
use podium::models::talk::TalkStatus;

pub const ALL_STATUSES: [TalkStatus; 6] = [
    TalkStatus::UnderConsideration,
    TalkStatus::Accepted,
    TalkStatus::Rejected,
    TalkStatus::Cancelled,
    TalkStatus::Withdrawn,
    TalkStatus::Provisional,
];

pub fn anonymous() -> Actor {
    Actor::anonymous()
}

/// An authenticated user with no special permissions.
pub fn user(id: i64) -> Actor {
    Actor {
        user_id: Some(id),
        permissions: Permissions::default(),
    }
}

/// A privileged reviewer: sees everything, edits nothing.
pub fn reviewer(id: i64) -> Actor {
    Actor {
        user_id: Some(id),
        permissions: Permissions(vec![PERM_VIEW_ALL.to_string()]),
    }
}

/// A talk manager: sees and edits everything.
pub fn manager(id: i64) -> Actor {
    Actor {
        user_id: Some(id),
        permissions: Permissions(vec![PERM_VIEW_ALL.to_string(), PERM_EDIT_ALL.to_string()]),
    }
}
