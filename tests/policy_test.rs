//! Visibility policy tests: who can see and who can touch a talk, across
//! every status and every kind of actor.

mod common;

use common::*;
use podium::auth::policy::{can_edit, can_view};
use podium::models::talk::TalkStatus;

const OWNER: i64 = 7;
const STRANGER: i64 = 8;

#[test]
fn accepted_and_cancelled_talks_are_visible_to_everyone() {
    for status in [TalkStatus::Accepted, TalkStatus::Cancelled] {
        assert!(can_view(&anonymous(), status, OWNER));
        assert!(can_view(&user(STRANGER), status, OWNER));
        assert!(can_view(&user(OWNER), status, OWNER));
        assert!(can_view(&reviewer(STRANGER), status, OWNER));
    }
}

#[test]
fn private_statuses_are_hidden_from_strangers_and_anonymous() {
    for status in ALL_STATUSES {
        if status.is_public() {
            continue;
        }
        assert!(
            !can_view(&anonymous(), status, OWNER),
            "anonymous saw a {status:?} talk"
        );
        assert!(
            !can_view(&user(STRANGER), status, OWNER),
            "stranger saw a {status:?} talk"
        );
    }
}

#[test]
fn owners_always_see_their_own_talks() {
    for status in ALL_STATUSES {
        assert!(can_view(&user(OWNER), status, OWNER));
    }
}

#[test]
fn reviewers_see_every_status() {
    for status in ALL_STATUSES {
        assert!(can_view(&reviewer(STRANGER), status, OWNER));
    }
}

#[test]
fn owner_edits_only_while_under_consideration() {
    assert!(can_edit(
        &user(OWNER),
        TalkStatus::UnderConsideration,
        OWNER
    ));
    for status in ALL_STATUSES {
        if status == TalkStatus::UnderConsideration {
            continue;
        }
        assert!(
            !can_edit(&user(OWNER), status, OWNER),
            "owner edited a {status:?} talk"
        );
    }
}

#[test]
fn strangers_and_anonymous_never_edit() {
    for status in ALL_STATUSES {
        assert!(!can_edit(&anonymous(), status, OWNER));
        assert!(!can_edit(&user(STRANGER), status, OWNER));
    }
}

#[test]
fn view_all_alone_grants_no_edit_rights() {
    for status in ALL_STATUSES {
        assert!(!can_edit(&reviewer(STRANGER), status, OWNER));
    }
}

#[test]
fn managers_edit_any_talk_in_any_status() {
    for status in ALL_STATUSES {
        assert!(can_edit(&manager(STRANGER), status, OWNER));
    }
}
