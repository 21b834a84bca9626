//! Field validation, status parsing, and permission-set tests.

use podium::auth::session::Permissions;
use podium::auth::validate;
use podium::models::talk::TalkStatus;

#[test]
fn title_is_required_and_bounded() {
    assert!(validate::validate_title("").is_some());
    assert!(validate::validate_title("   ").is_some());
    assert!(validate::validate_title(&"x".repeat(201)).is_some());
    assert!(validate::validate_title("Parsing with combinators").is_none());
}

#[test]
fn abstract_is_required_and_bounded() {
    assert!(validate::validate_abstract("").is_some());
    assert!(validate::validate_abstract(&"x".repeat(4001)).is_some());
    assert!(validate::validate_abstract("We build a parser.").is_none());
}

#[test]
fn url_requires_http_scheme() {
    assert!(validate::validate_url("").is_some());
    assert!(validate::validate_url("ftp://example.org/slides").is_some());
    assert!(validate::validate_url("javascript:alert(1)").is_some());
    assert!(validate::validate_url("https://example.org/slides.pdf").is_none());
    assert!(validate::validate_url("http://example.org/video").is_none());
}

#[test]
fn optional_fields_allow_empty_but_not_overlong() {
    assert!(validate::validate_optional("", "Description", 10).is_none());
    assert!(validate::validate_optional("short", "Description", 10).is_none());
    assert!(validate::validate_optional("far too long", "Description", 10).is_some());
}

#[test]
fn status_round_trips_through_its_string_form() {
    let statuses = [
        TalkStatus::UnderConsideration,
        TalkStatus::Accepted,
        TalkStatus::Rejected,
        TalkStatus::Cancelled,
        TalkStatus::Withdrawn,
        TalkStatus::Provisional,
    ];
    for status in statuses {
        assert_eq!(TalkStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(TalkStatus::parse("bogus"), None);
    assert_eq!(TalkStatus::parse("ACCEPTED"), None);
}

#[test]
fn only_accepted_and_cancelled_are_public() {
    assert!(TalkStatus::Accepted.is_public());
    assert!(TalkStatus::Cancelled.is_public());
    assert!(!TalkStatus::UnderConsideration.is_public());
    assert!(!TalkStatus::Rejected.is_public());
    assert!(!TalkStatus::Withdrawn.is_public());
    assert!(!TalkStatus::Provisional.is_public());
}

#[test]
fn permissions_parse_from_csv() {
    let perms = Permissions::from_csv("talks.view_all, talks.edit_all,,audit.view");
    assert!(perms.has("talks.view_all"));
    assert!(perms.has("talks.edit_all"));
    assert!(perms.has("audit.view"));
    assert!(!perms.has("talks.delete"));

    let empty = Permissions::from_csv("");
    assert!(!empty.has("talks.view_all"));
}
