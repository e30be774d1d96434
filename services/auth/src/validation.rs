//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reject empty form fields
pub fn validate_required(fields: &[&str]) -> Result<(), String> {
    if fields.iter().any(|field| field.is_empty()) {
        return Err("Please fill in all fields".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Please enter a valid email address".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }

    Ok(())
}

/// Trim and lower-case an email the way accounts store it
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
