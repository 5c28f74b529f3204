//! Router
//!
//! Maps paths to views and applies the authentication guard. Both front ends
//! ask [`resolve`] what to do with a path before rendering anything.

use crate::models::User;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const HOME: &str = "/";
pub const PROFILE: &str = "/profile";

/// A view the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    /// `/profile`, which only ever redirects to the viewer's own profile
    OwnProfile,
    Profile(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Self::Home,
            LOGIN => Self::Login,
            REGISTER => Self::Register,
            PROFILE => Self::OwnProfile,
            other => match other.strip_prefix("/profile/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Profile(id.to_string()),
                _ => Self::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => LOGIN.to_string(),
            Self::Register => REGISTER.to_string(),
            Self::Home | Self::NotFound => HOME.to_string(),
            Self::OwnProfile => PROFILE.to_string(),
            Self::Profile(id) => profile_path(id),
        }
    }

    /// Whether the view needs a logged-in viewer
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Home | Self::OwnProfile | Self::Profile(_))
    }
}

pub fn profile_path(user_id: &str) -> String {
    format!("{}/{}", PROFILE, user_id)
}

/// Outcome of routing a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(String),
}

/// Decide what to show for `path` given the current viewer
pub fn resolve(path: &str, viewer: Option<&User>) -> Resolution {
    let route = Route::parse(path);

    match (&route, viewer) {
        (Route::NotFound, _) => Resolution::Redirect(HOME.to_string()),
        (Route::Login | Route::Register, Some(_)) => Resolution::Redirect(HOME.to_string()),
        (Route::OwnProfile, Some(user)) => Resolution::Redirect(profile_path(&user.id)),
        (r, None) if r.requires_auth() => Resolution::Redirect(LOGIN.to_string()),
        _ => Resolution::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn viewer() -> User {
        User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            bio: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register/"), Route::Register);
        assert_eq!(Route::parse("/profile"), Route::OwnProfile);
        assert_eq!(Route::parse("/profile/u1"), Route::Profile("u1".to_string()));
        assert_eq!(Route::parse("/profile/u1?tab=posts"), Route::Profile("u1".to_string()));
        assert_eq!(Route::parse("/profile/u1/extra"), Route::NotFound);
        assert_eq!(Route::parse("/settings"), Route::NotFound);
    }

    #[test]
    fn test_guests_are_sent_to_login() {
        for path in ["/", "/profile", "/profile/u2"] {
            assert_eq!(resolve(path, None), Resolution::Redirect(LOGIN.to_string()), "{path}");
        }
        assert_eq!(resolve("/login", None), Resolution::Render(Route::Login));
        assert_eq!(resolve("/register", None), Resolution::Render(Route::Register));
    }

    #[test]
    fn test_signed_in_viewer() {
        let user = viewer();
        assert_eq!(resolve("/login", Some(&user)), Resolution::Redirect("/".to_string()));
        assert_eq!(resolve("/register", Some(&user)), Resolution::Redirect("/".to_string()));
        assert_eq!(resolve("/", Some(&user)), Resolution::Render(Route::Home));
        assert_eq!(
            resolve("/profile", Some(&user)),
            Resolution::Redirect("/profile/u1".to_string())
        );
        assert_eq!(
            resolve("/profile/u2", Some(&user)),
            Resolution::Render(Route::Profile("u2".to_string()))
        );
    }

    #[test]
    fn test_unknown_paths_go_home() {
        assert_eq!(resolve("/nope", None), Resolution::Redirect("/".to_string()));
        assert_eq!(resolve("/nope", Some(&viewer())), Resolution::Redirect("/".to_string()));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Profile("u1".into()).path(), "/profile/u1");
        assert_eq!(Route::parse(&Route::Register.path()), Route::Register);
    }
}
