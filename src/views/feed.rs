//! Home feed.

use std::fmt;

use chrono::{DateTime, TimeZone};

use super::Notice;
use crate::api::{ClientResult, SocialApi};
use crate::forms::validate_post;
use crate::models::{CreatePostRequest, Post, User};
use crate::session::{SessionStorage, SessionStore};
use crate::timefmt::format_relative;

/// Greeting shown at the top of the home view
pub fn greeting(user: Option<&User>) -> String {
    let name = user
        .map(User::email_local_part)
        .filter(|n| !n.is_empty())
        .unwrap_or("Professional");
    format!("Welcome Back, {}!", name)
}

/// The full list of posts, in server order
#[derive(Debug, Clone)]
pub struct Feed {
    posts: Vec<Post>,
    loading: bool,
    submitting: bool,
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}

impl Feed {
    /// A feed that has not been fetched yet
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
            submitting: false,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a post submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fetch every post. On failure the current list is kept.
    pub async fn refresh<A: SocialApi + ?Sized>(&mut self, api: &A) {
        self.loading = true;
        let result = api.list_posts().await;
        self.apply_posts(result);
    }

    /// Record the outcome of a feed fetch
    pub fn apply_posts(&mut self, result: ClientResult<Vec<Post>>) {
        match result {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Fetched feed");
                self.posts = posts;
            }
            Err(e) => tracing::warn!("Error fetching posts: {}", e),
        }
        self.loading = false;
    }

    /// Publish a post, then re-fetch the whole feed.
    ///
    /// Blank content is rejected locally. There is no optimistic insert: the
    /// new post only shows up once the server lists it.
    pub async fn create<A, S>(
        &mut self,
        api: &A,
        session: &SessionStore<S>,
        content: &str,
    ) -> Notice
    where
        A: SocialApi + ?Sized,
        S: SessionStorage,
    {
        let (token, request) = match self.begin_create(session.token(), content) {
            Ok(ready) => ready,
            Err(notice) => return notice,
        };

        let result = api.create_post(&token, &request).await;
        let notice = self.finish_create(result);
        if !notice.is_error() {
            self.refresh(api).await;
        }
        notice
    }

    /// Check a submission and mark it in flight.
    ///
    /// Returns the token and request to send, or the notice explaining why
    /// nothing should be sent.
    pub fn begin_create(
        &mut self,
        token: Option<&str>,
        content: &str,
    ) -> Result<(String, CreatePostRequest), Notice> {
        validate_post(content).map_err(|e| Notice::error(e.to_string()))?;
        let token = token.ok_or_else(|| Notice::error("Please sign in to continue"))?;

        self.submitting = true;
        Ok((
            token.to_string(),
            CreatePostRequest {
                content: content.to_string(),
            },
        ))
    }

    /// Record the outcome of a submission. On success the caller re-fetches.
    pub fn finish_create(&mut self, result: ClientResult<Post>) -> Notice {
        self.submitting = false;
        match result {
            Ok(post) => {
                tracing::info!(post_id = %post.id, "Post created");
                Notice::success("Post created successfully!")
            }
            Err(e) => Notice::error(e.user_message("Failed to create post")),
        }
    }

    /// `(post, relative time)` pairs ready for display, with absolute dates
    /// in `now`'s time zone
    pub fn rows<Tz>(&self, now: DateTime<Tz>) -> Vec<(&Post, String)>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let zone = now.timezone();
        self.posts
            .iter()
            .map(|p| (p, format_relative(now.clone(), p.created_at.with_timezone(&zone))))
            .collect()
    }
}
