//! View Controllers
//!
//! Headless versions of the application's views. Each controller owns the
//! state a view renders, issues requests through [`SocialApi`], and reports
//! outcomes as [`Notice`]s for the front end to show as toasts.
//!
//! ## Data Flow
//!
//! 1. A view reads session state
//! 2. It issues a request
//! 3. On success it updates its own state and/or the session
//! 4. The front end re-renders
//!
//! Nothing here retries, cancels or de-duplicates requests; a `loading` flag
//! only tells the front end to disable a control.
//!
//! [`SocialApi`]: crate::api::SocialApi

mod auth;
mod feed;
mod profile;

pub use auth::{complete_auth, login, register, AuthKind, AuthOutcome};
pub use feed::{greeting, Feed};
pub use profile::ProfileView;

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted in-memory API recording every call it receives.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::api::{ClientError, ClientResult, SocialApi};
    use crate::models::*;

    pub fn user(id: &str, email: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            bio: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn post(id: &str, author: &User, content: &str) -> Post {
        Post {
            id: id.to_string(),
            content: content.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            user_id: author.id.clone(),
            author: PostAuthor {
                id: author.id.clone(),
                name: author.name.clone(),
                email: author.email.clone(),
            },
        }
    }

    fn unscripted<T>() -> ClientResult<T> {
        Err(ClientError::Network("unscripted call".to_string()))
    }

    /// Server stand-in: posts live in a list that `create_post` prepends to.
    #[derive(Default)]
    pub struct FakeApi {
        pub calls: Mutex<Vec<String>>,
        pub auth: Option<ClientResult<AuthResponse>>,
        pub posts: Mutex<Vec<Post>>,
        pub posts_error: Option<ClientError>,
        pub create_error: Option<ClientError>,
        pub user: Option<ClientResult<User>>,
        pub update: Option<ClientResult<User>>,
    }

    impl FakeApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_auth(mut self, result: ClientResult<AuthResponse>) -> Self {
            self.auth = Some(result);
            self
        }

        pub fn with_posts(self, posts: Vec<Post>) -> Self {
            *self.posts.lock().unwrap() = posts;
            self
        }

        pub fn with_user(mut self, result: ClientResult<User>) -> Self {
            self.user = Some(result);
            self
        }

        pub fn with_update(mut self, result: ClientResult<User>) -> Self {
            self.update = Some(result);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    #[async_trait]
    impl SocialApi for FakeApi {
        async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
            self.record(format!("login {}", request.email));
            self.auth.clone().unwrap_or_else(unscripted)
        }

        async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
            self.record(format!("register {}", request.email));
            self.auth.clone().unwrap_or_else(unscripted)
        }

        async fn list_posts(&self) -> ClientResult<Vec<Post>> {
            self.record("list_posts");
            match &self.posts_error {
                Some(e) => Err(e.clone()),
                None => Ok(self.posts.lock().unwrap().clone()),
            }
        }

        async fn create_post(&self, token: &str, request: &CreatePostRequest) -> ClientResult<Post> {
            self.record(format!("create_post {} {}", token, request.content));
            if let Some(e) = &self.create_error {
                return Err(e.clone());
            }
            let author = user("u1", "a@b.com", "A");
            let mut posts = self.posts.lock().unwrap();
            let created = post(&format!("p{}", posts.len() + 1), &author, &request.content);
            posts.insert(0, created.clone());
            Ok(created)
        }

        async fn get_user(&self, id: &str) -> ClientResult<User> {
            self.record(format!("get_user {}", id));
            self.user.clone().unwrap_or_else(unscripted)
        }

        async fn update_profile(
            &self,
            token: &str,
            request: &UpdateProfileRequest,
        ) -> ClientResult<User> {
            self.record(format!("update_profile {} {}", token, request.name));
            self.update.clone().unwrap_or_else(unscripted)
        }

        async fn user_posts(&self, id: &str) -> ClientResult<Vec<Post>> {
            self.record(format!("user_posts {}", id));
            match &self.posts_error {
                Some(e) => Err(e.clone()),
                None => Ok(self
                    .posts
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|p| p.user_id == id)
                    .cloned()
                    .collect()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{user, FakeApi};
    use super::*;
    use crate::forms::LoginForm;
    use crate::models::AuthResponse;
    use crate::routes;
    use crate::session::{MemoryStorage, SessionStore};

    #[tokio::test]
    async fn test_login_then_own_profile() {
        let u1 = user("u1", "a@b.com", "A");
        let api = FakeApi::new()
            .with_auth(Ok(AuthResponse {
                token: "abc".to_string(),
                user: u1.clone(),
            }))
            .with_user(Ok(u1.clone()));
        let storage = MemoryStorage::new();
        let mut session = SessionStore::new(&storage);

        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let outcome = login(&api, &mut session, &form).await;
        assert_eq!(outcome.redirect(), Some(routes::HOME));
        assert_eq!(greeting(session.user()), "Welcome Back, a!");

        // A reload restores the identical pair.
        let reloaded = SessionStore::restore(&storage);
        assert_eq!(reloaded.token(), Some("abc"));
        assert_eq!(reloaded.user(), Some(&u1));

        let mut profile = ProfileView::new(Some("u1"), reloaded.user());
        profile.load(&api).await;
        assert!(profile.is_own_profile());
        assert!(profile.can_edit());
    }

    #[test]
    fn test_notice_accessors() {
        let notice = Notice::error("nope");
        assert!(notice.is_error());
        assert_eq!(notice.message(), "nope");
        assert!(!Notice::success("ok").is_error());
    }
}
