//! Login and registration submission.

use super::Notice;
use crate::api::{ClientResult, SocialApi};
use crate::forms::{LoginForm, RegisterForm};
use crate::models::AuthResponse;
use crate::routes;
use crate::session::{SessionStorage, SessionStore};

/// Result of submitting an authentication form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session populated; the front end should navigate home
    Authenticated { message: String },
    /// Nothing changed; `message` explains why
    Rejected { message: String },
}

impl AuthOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Authenticated { message } => Notice::success(message.clone()),
            Self::Rejected { message } => Notice::error(message.clone()),
        }
    }

    /// Where to navigate after the submission, if anywhere
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Authenticated { .. } => Some(routes::HOME),
            Self::Rejected { .. } => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Which form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

impl AuthKind {
    fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Welcome back!",
            Self::Register => "Account created successfully!",
        }
    }

    fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }
}

/// Submit the login form
pub async fn login<A, S>(api: &A, session: &mut SessionStore<S>, form: &LoginForm) -> AuthOutcome
where
    A: SocialApi + ?Sized,
    S: SessionStorage,
{
    let result = api.login(&form.to_request()).await;
    complete_auth(result, session, AuthKind::Login)
}

/// Validate and submit the registration form.
///
/// Local checks run first; when one fails no request is issued.
pub async fn register<A, S>(
    api: &A,
    session: &mut SessionStore<S>,
    form: &RegisterForm,
) -> AuthOutcome
where
    A: SocialApi + ?Sized,
    S: SessionStorage,
{
    if let Err(e) = form.validate() {
        return AuthOutcome::Rejected {
            message: e.to_string(),
        };
    }

    let result = api.register(&form.to_request()).await;
    complete_auth(result, session, AuthKind::Register)
}

/// Apply an authentication response: start the session on success, or
/// pick the message to show on failure
pub fn complete_auth<S: SessionStorage>(
    result: ClientResult<AuthResponse>,
    session: &mut SessionStore<S>,
    kind: AuthKind,
) -> AuthOutcome {
    match result {
        Ok(auth) => {
            if let Err(e) = session.login(auth.token, auth.user) {
                tracing::warn!("Session could not be persisted: {}", e);
            }
            AuthOutcome::Authenticated {
                message: kind.success_message().to_string(),
            }
        }
        Err(e) => {
            tracing::debug!("Authentication failed: {}", e);
            AuthOutcome::Rejected {
                message: e.user_message(kind.fallback_message()),
            }
        }
    }
}
