//! Local form checks
//!
//! Convenience checks run before a request is issued. A failing check means
//! no request goes out.

use thiserror::Error;

use super::password::MIN_PASSWORD_LEN;

/// Longest post the composer accepts
pub const MAX_POST_LEN: usize = 1000;

/// Reasons a form is rejected before submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,

    #[error("Please write something before posting")]
    EmptyPost,

    #[error("Posts are limited to {} characters", MAX_POST_LEN)]
    PostTooLong,

    #[error("No user ID provided")]
    MissingUserId,
}

/// Registration checks, in the order the form reports them
pub fn validate_registration(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Post composer checks
pub fn validate_post(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyPost);
    }
    if content.chars().count() > MAX_POST_LEN {
        return Err(ValidationError::PostTooLong);
    }
    Ok(())
}

/// Character counter shown under the composer
pub fn post_counter(content: &str) -> String {
    format!("{}/{} characters", content.chars().count(), MAX_POST_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_reported_first() {
        assert_eq!(
            validate_registration("abc", "abd"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_short_password() {
        let err = validate_registration("abc12", "abc12").unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooShort);
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_valid_registration() {
        assert!(validate_registration("secret", "secret").is_ok());
    }

    #[test]
    fn test_post_content() {
        assert_eq!(validate_post("   \n"), Err(ValidationError::EmptyPost));
        assert!(validate_post("hello").is_ok());
        assert!(validate_post(&"x".repeat(MAX_POST_LEN)).is_ok());
        assert_eq!(
            validate_post(&"x".repeat(MAX_POST_LEN + 1)),
            Err(ValidationError::PostTooLong)
        );
    }

    #[test]
    fn test_post_counter() {
        assert_eq!(post_counter("hey"), "3/1000 characters");
    }
}
