//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod api_settings;
pub mod create_post;
pub mod loading;
pub mod nav;
pub mod password_meter;
pub mod post_card;
pub mod toast;

pub use api_settings::ApiSettings;
pub use create_post::CreatePost;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use password_meter::PasswordMeter;
pub use post_card::{PostCard, PostsList};
pub use toast::Toast;
