//! Form Logic
//!
//! Pure helpers behind the login, registration, composer and profile forms.
//! Shared by the terminal front end and the browser front end.

mod password;
mod validation;

pub use password::{password_strength, StrengthLabel, MIN_PASSWORD_LEN};
pub use validation::{post_counter, validate_post, validate_registration, ValidationError, MAX_POST_LEN};

use crate::models::{LoginRequest, RegisterRequest, UpdateProfileRequest, User};

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Registration form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_registration(&self.password, &self.confirm_password)
    }

    /// Current password score for the strength meter
    pub fn strength(&self) -> u8 {
        password_strength(&self.password)
    }

    /// Percentage of fields filled in (0, 25, 50, 75 or 100)
    pub fn progress(&self) -> u8 {
        let filled = [&self.name, &self.email, &self.password, &self.confirm_password]
            .iter()
            .filter(|f| !f.is_empty())
            .count();
        (filled * 25) as u8
    }

    /// Request body; the confirmation never leaves the client
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Profile edit form, pre-filled from the fetched profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            bio: user.bio.clone(),
        }
    }

    pub fn to_request(&self) -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: self.name.clone(),
            bio: self.bio.clone(),
        }
    }
}
