//! Password strength heuristic
//!
//! Four independent checks worth 25 points each. The score only drives the
//! meter on the registration form; the server decides what it accepts.

use std::fmt;

/// Minimum password length, shared with registration validation
pub const MIN_PASSWORD_LEN: usize = 6;

/// Score a password from 0 to 100 in steps of 25
pub fn password_strength(password: &str) -> u8 {
    let mut strength = 0;

    if password.chars().count() >= MIN_PASSWORD_LEN {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 25;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 25;
    }

    strength
}

/// Human-readable bucket for a strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=24 => Self::Weak,
            25..=49 => Self::Fair,
            50..=74 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
