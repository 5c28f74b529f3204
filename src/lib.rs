//! # Linkboard
//!
//! Client for a small professional social network: profile pages, a post
//! feed and email/password authentication, all backed by a remote REST API.
//!
//! ## Modules
//!
//! - [`models`]: Records exchanged with the API
//! - [`session`]: Session store and its storage backends
//! - [`api`]: Endpoint table, error kinds and the [`SocialApi`] seam
//! - [`forms`]: Form validation and the password strength meter
//! - [`views`]: Headless view controllers (auth, feed, profile)
//! - [`routes`]: Path routing and the authentication guard
//! - [`timefmt`]: Relative time display
//!
//! With the default `native` feature the crate also provides a reqwest-backed
//! [`HttpClient`], a file-backed session and TOML configuration. Without it
//! the crate builds for `wasm32` and is shared with the browser front end.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linkboard::config::Config;
//! use linkboard::forms::LoginForm;
//! use linkboard::session::{FileStorage, SessionStore};
//! use linkboard::{views, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = HttpClient::new(&config.api)?;
//!     let mut session = SessionStore::restore(FileStorage::new(config.session.path()));
//!
//!     let form = LoginForm {
//!         email: "ada@example.com".into(),
//!         password: "Secret1!".into(),
//!     };
//!     let outcome = views::login(&api, &mut session, &form).await;
//!     println!("{}", outcome.notice().message());
//!
//!     let mut feed = views::Feed::new();
//!     feed.refresh(&api).await;
//!     println!("{} posts", feed.posts().len());
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod forms;
pub mod models;
pub mod routes;
pub mod session;
pub mod timefmt;
pub mod views;

// Re-export top-level types for convenience
pub use api::{ClientError, ClientResult, SocialApi, DEFAULT_API_BASE};
#[cfg(feature = "native")]
pub use api::HttpClient;

pub use models::{AuthResponse, Post, PostAuthor, Session, User};

pub use session::{MemoryStorage, SessionError, SessionStorage, SessionStore};

pub use forms::{password_strength, StrengthLabel, ValidationError};

pub use routes::{resolve, Resolution, Route};

pub use timefmt::format_relative;

pub use views::{AuthOutcome, Feed, Notice, ProfileView};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
