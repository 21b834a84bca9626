use sqlx::PgPool;

use crate::errors::AppError;

/// A submission category. `disable_submission` switches off new
/// submissions for the category without hiding existing talks.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TalkType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub disable_submission: bool,
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<TalkType>, AppError> {
    let types = sqlx::query_as::<_, TalkType>(
        "SELECT id, name, description, disable_submission FROM talk_types ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(types)
}

/// Submission is open when the global flag is set and, if any talk types
/// are configured, at least one of them still accepts submissions.
pub fn submission_open(talks_open: bool, types: &[TalkType]) -> bool {
    if !talks_open {
        return false;
    }
    types.is_empty() || types.iter().any(|t| !t.disable_submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talk_type(id: i64, disable_submission: bool) -> TalkType {
        TalkType {
            id,
            name: format!("type-{id}"),
            description: String::new(),
            disable_submission,
        }
    }

    #[test]
    fn closed_when_global_flag_is_off() {
        assert!(!submission_open(false, &[]));
        assert!(!submission_open(false, &[talk_type(1, false)]));
    }

    #[test]
    fn open_with_no_configured_types() {
        assert!(submission_open(true, &[]));
    }

    #[test]
    fn closed_when_every_type_is_disabled() {
        assert!(!submission_open(true, &[talk_type(1, true), talk_type(2, true)]));
    }

    #[test]
    fn open_while_any_type_accepts_submissions() {
        assert!(submission_open(true, &[talk_type(1, true), talk_type(2, false)]));
    }
}
