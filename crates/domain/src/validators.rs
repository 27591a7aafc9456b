pub const TITLE_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 150;
pub const USERNAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 150;

/// Checks that a required text field is non-empty and at most `max` characters.
pub fn validate_text(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if value.chars().count() > max {
        return Err(format!("{field} cannot exceed {max} characters"));
    }
    Ok(())
}

pub fn validate_optional_text(field: &str, value: &Option<String>, max: usize) -> Result<(), String> {
    match value {
        Some(v) => validate_text(field, v, max),
        None => Ok(()),
    }
}

pub fn validate_uid(uid: &str) -> Result<(), String> {
    if uid.trim().is_empty() {
        return Err("uid cannot be empty".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    validate_text("email", email, EMAIL_MAX_LEN)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("email must be a valid address".to_string()),
    }
}
