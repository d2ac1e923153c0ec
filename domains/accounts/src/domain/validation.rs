//! Registration policy validation
//!
//! Nickname and password constraints evaluated before any persistence runs.

use corkboard_common::{Error, Result};
use regex::Regex;

lazy_static::lazy_static! {
    static ref HAS_UPPERCASE: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref HAS_LOWERCASE: Regex = Regex::new(r"[a-z]").unwrap();
    static ref HAS_DIGIT: Regex = Regex::new(r"\d").unwrap();
}

/// Validate the nickname policy: at least 3 characters, with at least one
/// ASCII uppercase letter, one lowercase letter, and one digit.
pub fn validate_nickname(nickname: &str) -> Result<()> {
    if nickname.chars().count() < 3
        || !HAS_UPPERCASE.is_match(nickname)
        || !HAS_LOWERCASE.is_match(nickname)
        || !HAS_DIGIT.is_match(nickname)
    {
        return Err(Error::Validation(
            "Nickname must consist of at least 3 letters, uppercase and lowercase letters (a~z, A~Z), and numbers (0~9)"
                .to_string(),
        ));
    }

    Ok(())
}

/// Validate the password policy: at least 4 characters and distinct from
/// the nickname.
pub fn validate_password(password: &str, nickname: &str) -> Result<()> {
    if password.chars().count() < 4 || password == nickname {
        return Err(Error::Validation(
            "Password must be at least 4 characters long, and cannot same as the nickname"
                .to_string(),
        ));
    }

    Ok(())
}
