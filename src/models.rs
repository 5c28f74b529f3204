//! Data Model
//!
//! Records exchanged with the Linkboard API. These mirror the server's JSON
//! shapes; the client trusts them and enforces no referential integrity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Records
// ============================================

/// A user account as cached by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Free-text biography, empty when the user never set one
    #[serde(default)]
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Part of the email before the `@`, used for greetings
    pub fn email_local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }

    /// Upper-cased first letter of the display name, for avatars
    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// Author snapshot embedded in every post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl PostAuthor {
    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// A text post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    /// The server names the author snapshot `users`
    #[serde(rename = "users")]
    pub author: PostAuthor,
}

/// An authenticated browser/terminal instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

fn initial_of(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('U')
}

// ============================================
// Request/Response DTOs
// ============================================

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Success body of both auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Body of `POST /api/posts`
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    pub content: String,
}

/// Body of `PUT /api/users/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub bio: String,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
