//! Linkboard REST API Client
//!
//! reqwest-backed [`SocialApi`] used by the terminal front end.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{endpoints, join_url, ClientError, ClientResult, SocialApi};
use crate::config::ApiConfig;
use crate::models::{
    AuthResponse, CreatePostRequest, LoginRequest, Post, RegisterRequest, UpdateProfileRequest,
    User,
};

/// HTTP client for the Linkboard API
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client from configuration. A timeout of `0` means none.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Send a request and decode a JSON success body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "API request rejected");
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Network(e.to_string())
    }
}

#[async_trait]
impl SocialApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        tracing::debug!(email = %request.email, "POST {}", endpoints::LOGIN);
        self.send(self.client.post(self.url(endpoints::LOGIN)).json(request))
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        tracing::debug!(email = %request.email, "POST {}", endpoints::REGISTER);
        self.send(self.client.post(self.url(endpoints::REGISTER)).json(request))
            .await
    }

    async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        tracing::debug!("GET {}", endpoints::POSTS);
        self.send(self.client.get(self.url(endpoints::POSTS))).await
    }

    async fn create_post(&self, token: &str, request: &CreatePostRequest) -> ClientResult<Post> {
        tracing::debug!("POST {}", endpoints::POSTS);
        self.send(
            self.client
                .post(self.url(endpoints::POSTS))
                .bearer_auth(token)
                .json(request),
        )
        .await
    }

    async fn get_user(&self, id: &str) -> ClientResult<User> {
        let path = endpoints::user(id);
        tracing::debug!("GET {}", path);
        self.send(self.client.get(self.url(&path))).await
    }

    async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> ClientResult<User> {
        tracing::debug!("PUT {}", endpoints::PROFILE);
        self.send(
            self.client
                .put(self.url(endpoints::PROFILE))
                .bearer_auth(token)
                .json(request),
        )
        .await
    }

    async fn user_posts(&self, id: &str) -> ClientResult<Vec<Post>> {
        let path = endpoints::user_posts(id);
        tracing::debug!("GET {}", path);
        self.send(self.client.get(self.url(&path))).await
    }
}
