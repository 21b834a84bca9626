/// Validate a talk title: required, max 200 chars.
pub fn validate_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Some("Title is required".to_string());
    }
    if trimmed.len() > 200 {
        return Some("Title must be at most 200 characters".to_string());
    }
    None
}

/// Validate a talk abstract: required, max 4000 chars.
pub fn validate_abstract(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some("Abstract is required".to_string());
    }
    if trimmed.len() > 4000 {
        return Some("Abstract must be at most 4000 characters".to_string());
    }
    None
}

/// Validate a URL field: required, http(s) scheme, max 500 chars.
pub fn validate_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Some("URL is required".to_string());
    }
    if trimmed.len() > 500 {
        return Some("URL must be at most 500 characters".to_string());
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Some("URL must start with http:// or https://".to_string());
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}
