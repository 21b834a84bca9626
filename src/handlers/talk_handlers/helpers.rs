use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::talk_type::TalkType;
use crate::models::user;

/// Parse the talk type selector value against the configured types.
/// Empty selection is allowed; a value that is not a configured type id
/// appends a validation error.
pub fn parse_talk_type(
    raw: &str,
    types: &[TalkType],
    errors: &mut Vec<String>,
) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) if types.iter().any(|t| t.id == id) => Some(id),
        _ => {
            errors.push("Unknown talk type".to_string());
            None
        }
    }
}

/// Resolve a comma-separated list of co-author usernames to user ids.
/// Unknown usernames append validation errors instead of failing the
/// request.
pub async fn resolve_authors(
    pool: &PgPool,
    raw: &str,
    errors: &mut Vec<String>,
) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match user::find_id_by_username(pool, name).await? {
            Some(id) => {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            None => errors.push(format!("Unknown user '{name}'")),
        }
    }
    Ok(ids)
}
