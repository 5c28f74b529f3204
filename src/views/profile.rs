//! Profile view.

use super::Notice;
use crate::api::{ClientResult, SocialApi};
use crate::forms::{ProfileForm, ValidationError};
use crate::models::{Post, User};
use crate::session::{SessionStorage, SessionStore};

/// State behind `/profile/:userId`
#[derive(Debug, Clone)]
pub struct ProfileView {
    user_id: Option<String>,
    viewer_id: Option<String>,
    profile: Option<User>,
    posts: Vec<Post>,
    loading: bool,
    error: Option<String>,
    editing: bool,
    form: ProfileForm,
    following: bool,
}

impl ProfileView {
    /// View for `user_id` as seen by `viewer`. A missing id is an error state.
    pub fn new(user_id: Option<&str>, viewer: Option<&User>) -> Self {
        let user_id = user_id.filter(|id| !id.is_empty()).map(str::to_string);
        let error = user_id
            .is_none()
            .then(|| ValidationError::MissingUserId.to_string());

        Self {
            loading: user_id.is_some(),
            user_id,
            viewer_id: viewer.map(|v| v.id.clone()),
            profile: None,
            posts: Vec::new(),
            error,
            editing: false,
            form: ProfileForm::default(),
            following: false,
        }
    }

    /// Fetch the profile and the user's posts as two independent requests.
    ///
    /// Either may fail without affecting the other; failures are logged and
    /// leave that part empty.
    pub async fn load<A: SocialApi + ?Sized>(&mut self, api: &A) {
        let Some(id) = self.user_id.clone() else {
            tracing::warn!("No userId provided for profile view");
            return;
        };
        self.loading = true;

        let profile = api.get_user(&id).await;
        self.apply_profile(profile);
        let posts = api.user_posts(&id).await;
        self.apply_posts(posts);
    }

    /// Record the outcome of the profile request
    pub fn apply_profile(&mut self, result: ClientResult<User>) {
        match result {
            Ok(user) => {
                self.form = ProfileForm::from_user(&user);
                self.profile = Some(user);
            }
            Err(e) => tracing::warn!(user_id = ?self.user_id, "Failed to fetch user profile: {}", e),
        }
    }

    /// Record the outcome of the posts request. Posts are fetched second, so
    /// this also ends the loading state.
    pub fn apply_posts(&mut self, result: ClientResult<Vec<Post>>) {
        match result {
            Ok(posts) => self.posts = posts,
            Err(e) => tracing::warn!(user_id = ?self.user_id, "Failed to fetch user posts: {}", e),
        }
        self.loading = false;
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the viewer is looking at their own profile
    pub fn is_own_profile(&self) -> bool {
        matches!((&self.viewer_id, &self.user_id), (Some(v), Some(u)) if v == u)
    }

    /// The edit affordance is offered on one's own, loaded profile
    pub fn can_edit(&self) -> bool {
        self.is_own_profile() && self.profile.is_some()
    }

    pub fn posts_heading(&self) -> String {
        match (&self.profile, self.is_own_profile()) {
            (_, true) => "Your Posts".to_string(),
            (Some(user), false) => format!("{}'s Posts", user.name),
            (None, false) => "Posts".to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    pub fn begin_edit(&mut self) {
        if self.can_edit() {
            self.editing = true;
        }
    }

    /// Close the editor and reset the form to the loaded profile
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        if let Some(user) = &self.profile {
            self.form = ProfileForm::from_user(user);
        }
    }

    /// Submit the edit form. On success the shown profile and the session's
    /// cached user are both replaced by the server's response.
    pub async fn save_edit<A, S>(&mut self, api: &A, session: &mut SessionStore<S>) -> Notice
    where
        A: SocialApi + ?Sized,
        S: SessionStorage,
    {
        let Some(token) = session.token().map(str::to_string) else {
            return Notice::error("Please sign in to continue");
        };

        let result = api.update_profile(&token, &self.form.to_request()).await;
        self.apply_edit(result, session)
    }

    /// Record the outcome of a profile update
    pub fn apply_edit<S: SessionStorage>(
        &mut self,
        result: ClientResult<User>,
        session: &mut SessionStore<S>,
    ) -> Notice {
        match result {
            Ok(updated) => {
                if session.user().map(|u| u.id.as_str()) == Some(updated.id.as_str()) {
                    if let Err(e) = session.replace_user(updated.clone()) {
                        tracing::warn!("Updated profile could not be persisted: {}", e);
                    }
                }
                self.form = ProfileForm::from_user(&updated);
                self.profile = Some(updated);
                self.editing = false;
                Notice::success("Profile updated successfully!")
            }
            Err(e) if e.is_transport() => Notice::error(e.user_message("")),
            Err(e) => {
                tracing::debug!("Profile update rejected: {}", e);
                Notice::error("Failed to update profile")
            }
        }
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    /// Flip the follow state. Local only; nothing is sent to the server.
    pub fn toggle_follow(&mut self) -> Notice {
        self.following = !self.following;
        if self.following {
            Notice::success("Following now!")
        } else {
            Notice::success("Unfollowed successfully!")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClientError, NETWORK_ERROR_MESSAGE};
    use crate::session::MemoryStorage;
    use crate::views::fake::{post, user, FakeApi};

    #[test]
    fn test_missing_user_id() {
        let view = ProfileView::new(None, None);
        assert_eq!(view.error(), Some("No user ID provided"));
        assert!(!view.is_loading());

        let view = ProfileView::new(Some(""), None);
        assert!(view.error().is_some());
    }

    #[tokio::test]
    async fn test_missing_user_id_sends_nothing() {
        let api = FakeApi::new();
        let mut view = ProfileView::new(None, None);
        view.load(&api).await;
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_loads_profile_and_posts_separately() {
        let other = user("u2", "b@c.com", "Bea");
        let me = user("u1", "a@b.com", "A");
        let api = FakeApi::new()
            .with_user(Ok(other.clone()))
            .with_posts(vec![post("p1", &other, "mine"), post("p2", &me, "not hers")]);
        let mut view = ProfileView::new(Some("u2"), Some(&me));

        view.load(&api).await;

        assert_eq!(api.calls(), vec!["get_user u2", "user_posts u2"]);
        assert_eq!(view.profile(), Some(&other));
        assert_eq!(view.posts().len(), 1);
        assert!(!view.is_own_profile());
        assert!(!view.can_edit());
        assert_eq!(view.posts_heading(), "Bea's Posts");
    }

    #[tokio::test]
    async fn test_profile_failure_still_loads_posts() {
        let other = user("u2", "b@c.com", "Bea");
        let api = FakeApi::new()
            .with_user(Err(ClientError::Api {
                status: 404,
                message: None,
            }))
            .with_posts(vec![post("p1", &other, "hi")]);
        let mut view = ProfileView::new(Some("u2"), None);

        view.load(&api).await;

        assert!(view.profile().is_none());
        assert_eq!(view.posts().len(), 1);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_edit_own_profile() {
        let me = user("u1", "a@b.com", "A");
        let mut renamed = me.clone();
        renamed.name = "Ada".to_string();
        renamed.bio = "Engineer".to_string();

        let api = FakeApi::new()
            .with_user(Ok(me.clone()))
            .with_update(Ok(renamed.clone()));
        let storage = MemoryStorage::new();
        let mut session = SessionStore::new(&storage);
        session.login("abc".to_string(), me.clone()).unwrap();

        let mut view = ProfileView::new(Some("u1"), session.user());
        view.load(&api).await;
        assert_eq!(view.posts_heading(), "Your Posts");
        assert_eq!(view.form().name, "A");

        view.begin_edit();
        assert!(view.is_editing());
        view.form_mut().name = "Ada".to_string();
        view.form_mut().bio = "Engineer".to_string();

        let notice = view.save_edit(&api, &mut session).await;

        assert_eq!(notice, Notice::success("Profile updated successfully!"));
        assert!(!view.is_editing());
        assert_eq!(view.profile(), Some(&renamed));
        assert_eq!(session.user(), Some(&renamed));
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(SessionStore::restore(&storage).user(), Some(&renamed));
        assert!(api.calls().contains(&"update_profile abc Ada".to_string()));
    }

    #[tokio::test]
    async fn test_edit_failures() {
        let me = user("u1", "a@b.com", "A");
        let mut session = SessionStore::new(MemoryStorage::new());
        session.login("abc".to_string(), me.clone()).unwrap();
        let mut view = ProfileView::new(Some("u1"), session.user());

        let api = FakeApi::new().with_update(Err(ClientError::Api {
            status: 400,
            message: Some("Name is required".to_string()),
        }));
        let notice = view.save_edit(&api, &mut session).await;
        assert_eq!(notice, Notice::error("Failed to update profile"));

        let api = FakeApi::new().with_update(Err(ClientError::Timeout));
        let notice = view.save_edit(&api, &mut session).await;
        assert_eq!(notice, Notice::error(NETWORK_ERROR_MESSAGE));
        assert_eq!(session.user(), Some(&me));
    }

    #[test]
    fn test_cannot_edit_someone_else() {
        let me = user("u1", "a@b.com", "A");
        let mut view = ProfileView::new(Some("u2"), Some(&me));
        view.begin_edit();
        assert!(!view.is_editing());
    }

    #[tokio::test]
    async fn test_follow_is_local() {
        let api = FakeApi::new();
        let mut view = ProfileView::new(Some("u2"), None);

        assert_eq!(view.toggle_follow(), Notice::success("Following now!"));
        assert!(view.is_following());
        assert_eq!(view.toggle_follow(), Notice::success("Unfollowed successfully!"));
        assert!(!view.is_following());
        assert!(api.calls().is_empty());
    }
}
