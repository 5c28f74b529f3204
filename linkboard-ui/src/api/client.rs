//! HTTP API Client
//!
//! Functions for communicating with the Linkboard REST API. Each returns the
//! shared [`ClientError`] so pages can pick the same messages the terminal
//! client shows.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use linkboard::api::{endpoints, join_url, ClientError, ClientResult, DEFAULT_API_BASE};
use linkboard::models::{
    AuthResponse, CreatePostRequest, LoginRequest, Post, RegisterRequest, UpdateProfileRequest,
    User,
};

/// localStorage key holding an API origin override
const API_URL_KEY: &str = "linkboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());
    normalize_api_base(stored.as_deref())
}

/// Store an API base URL override; a blank value restores the default.
///
/// Returns the base now in effect.
pub fn set_api_base(url: &str) -> String {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let result = if url.trim().is_empty() {
            storage.remove_item(API_URL_KEY)
        } else {
            storage.set_item(API_URL_KEY, url.trim())
        };
        if let Err(e) = result {
            web_sys::console::error_1(&format!("Failed to save API URL: {:?}", e).into());
        }
    }
    get_api_base()
}

fn normalize_api_base(stored: Option<&str>) -> String {
    let url = stored
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    url.trim_end_matches('/').to_string()
}

fn url(path: &str) -> String {
    join_url(&get_api_base(), path)
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Send a request and decode a 2xx JSON body
async fn send<T: DeserializeOwned>(request: Result<Request, gloo_net::Error>) -> ClientResult<T> {
    let request = request.map_err(|e| ClientError::Setup(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::from_response(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

// ============ API Functions ============

pub async fn login(request: &LoginRequest) -> ClientResult<AuthResponse> {
    send(Request::post(&url(endpoints::LOGIN)).json(request)).await
}

pub async fn register(request: &RegisterRequest) -> ClientResult<AuthResponse> {
    send(Request::post(&url(endpoints::REGISTER)).json(request)).await
}

/// Fetch every post
pub async fn list_posts() -> ClientResult<Vec<Post>> {
    send(Request::get(&url(endpoints::POSTS)).build()).await
}

pub async fn create_post(token: &str, request: &CreatePostRequest) -> ClientResult<Post> {
    send(authorized(Request::post(&url(endpoints::POSTS)), token).json(request)).await
}

pub async fn get_user(user_id: &str) -> ClientResult<User> {
    send(Request::get(&url(&endpoints::user(user_id))).build()).await
}

/// Update the signed-in user's name and bio
pub async fn update_profile(token: &str, request: &UpdateProfileRequest) -> ClientResult<User> {
    send(authorized(Request::put(&url(endpoints::PROFILE)), token).json(request)).await
}

pub async fn user_posts(user_id: &str) -> ClientResult<Vec<Post>> {
    send(Request::get(&url(&endpoints::user_posts(user_id))).build()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_default() {
        assert_eq!(normalize_api_base(None), "http://localhost:3001");
        assert_eq!(normalize_api_base(Some("  ")), "http://localhost:3001");
    }

    #[test]
    fn test_api_base_override() {
        assert_eq!(
            normalize_api_base(Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }
}
