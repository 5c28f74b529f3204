//! Linkboard API
//!
//! The remote REST API is the only source of truth; this module describes its
//! endpoints and the client seam the views talk through.
//!
//! | Method | Path | Body | Returns |
//! |--------|------|------|---------|
//! | POST | `/api/auth/login` | [`LoginRequest`] | [`AuthResponse`] |
//! | POST | `/api/auth/register` | [`RegisterRequest`] | [`AuthResponse`] |
//! | GET | `/api/posts` | | `[Post]` |
//! | POST | `/api/posts` (bearer) | [`CreatePostRequest`] | [`Post`] |
//! | GET | `/api/users/:id` | | [`User`] |
//! | PUT | `/api/users/profile` (bearer) | [`UpdateProfileRequest`] | [`User`] |
//! | GET | `/api/posts/user/:id` | | `[Post]` |

mod error;
#[cfg(feature = "native")]
mod http;

pub use error::{ClientError, ClientResult, NETWORK_ERROR_MESSAGE};
#[cfg(feature = "native")]
pub use http::HttpClient;

use async_trait::async_trait;

use crate::models::{
    AuthResponse, CreatePostRequest, LoginRequest, Post, RegisterRequest, UpdateProfileRequest,
    User,
};

/// Default API origin
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Endpoint paths, relative to the API origin
pub mod endpoints {
    pub const LOGIN: &str = "/api/auth/login";
    pub const REGISTER: &str = "/api/auth/register";
    pub const POSTS: &str = "/api/posts";
    pub const PROFILE: &str = "/api/users/profile";

    /// `GET /api/users/:id`
    pub fn user(id: &str) -> String {
        format!("/api/users/{}", urlencoding::encode(id))
    }

    /// `GET /api/posts/user/:id`
    pub fn user_posts(id: &str) -> String {
        format!("/api/posts/user/{}", urlencoding::encode(id))
    }
}

/// Join an origin and an endpoint path, tolerating a trailing slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Operations the views need from the API.
///
/// Calls are independent: nothing is cached, retried or de-duplicated.
#[async_trait]
pub trait SocialApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse>;

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse>;

    /// Every post, newest first as ordered by the server
    async fn list_posts(&self) -> ClientResult<Vec<Post>>;

    async fn create_post(&self, token: &str, request: &CreatePostRequest) -> ClientResult<Post>;

    async fn get_user(&self, id: &str) -> ClientResult<User>;

    async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> ClientResult<User>;

    async fn user_posts(&self, id: &str) -> ClientResult<Vec<Post>>;
}
