use actix_session::Session;

use crate::auth::policy::Actor;
use crate::errors::AppError;

/// Wrapper around permission codes with a `has()` method for use in Askama templates.
#[derive(Debug, Clone, Default)]
pub struct Permissions(pub Vec<String>);

impl Permissions {
    pub fn has(&self, code: &str) -> bool {
        self.0.iter().any(|p| p == code)
    }

    pub fn from_csv(csv: &str) -> Self {
        let codes = csv
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Permissions(codes)
    }
}

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

pub fn get_username(session: &Session) -> Option<String> {
    session.get::<String>("username").unwrap_or(None)
}

/// Permission codes loaded at login. Empty for anonymous sessions.
pub fn get_permissions(session: &Session) -> Permissions {
    match session.get::<String>("permissions") {
        Ok(Some(csv)) => Permissions::from_csv(&csv),
        _ => Permissions::default(),
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

/// The acting identity for visibility decisions; anonymous when not logged in.
pub fn current_actor(session: &Session) -> Actor {
    Actor {
        user_id: get_user_id(session),
        permissions: get_permissions(session),
    }
}

/// Check permission; returns Err(AppError) if denied.
pub fn require_permission(session: &Session, code: &str) -> Result<(), AppError> {
    if get_permissions(session).has(code) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(code.to_string()))
    }
}
