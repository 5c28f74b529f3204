//! Profile Page
//!
//! Profile header, the user's posts, an edit dialog on one's own profile
//! and a follow button on everyone else's.

use chrono::Local;
use leptos::*;
use leptos_router::*;

use linkboard::timefmt::format_date;
use linkboard::views::ProfileView;

use super::login::INPUT_CLASS;
use crate::api;
use crate::components::{Loading, PostsList};
use crate::state::{GlobalState, SessionContext};

#[component]
pub fn Profile() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let user_id = move || params.with(|p| p.get("user_id").cloned());

    let view_state = create_rw_signal(ProfileView::new(
        params.with_untracked(|p| p.get("user_id").cloned()).as_deref(),
        session.user.get_untracked().as_ref(),
    ));

    // Reload whenever the route parameter changes
    create_effect(move |_| {
        let id = user_id();
        let viewer = session.user.get_untracked();
        view_state.set(ProfileView::new(id.as_deref(), viewer.as_ref()));

        let Some(id) = id else {
            return;
        };
        spawn_local(async move {
            let profile = api::get_user(&id).await;
            view_state.try_update(|v| v.apply_profile(profile));
            let posts = api::user_posts(&id).await;
            view_state.try_update(|v| v.apply_posts(posts));
        });
    });

    let status = create_memo(move |_| view_state.with(Status::of));
    let editing = create_memo(move |_| view_state.with(ProfileView::is_editing));
    let posts = create_memo(move |_| view_state.with(|v| v.posts().to_vec()));
    let loading = create_memo(move |_| view_state.with(ProfileView::is_loading));

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            {move || match status.get() {
                Status::Invalid(error) => view! {
                    <p class="text-center text-red-600 py-8">{error}</p>
                }.into_view(),
                Status::Loading => view! { <Loading /> }.into_view(),
                Status::NotFound => view! {
                    <p class="text-center text-gray-500 py-8">"User not found"</p>
                }.into_view(),
                Status::Found => view! { <ProfileHeader view_state=view_state /> }.into_view(),
            }}

            <section class="space-y-4">
                <h2 class="text-xl font-semibold text-gray-900">
                    {move || view_state.with(ProfileView::posts_heading)}
                </h2>
                <PostsList posts=posts loading=loading />
            </section>

            {move || editing.get().then(|| view! { <EditDialog view_state=view_state /> })}
        </div>
    }
}

/// What the top of the page shows
#[derive(Clone, PartialEq)]
enum Status {
    Invalid(String),
    Loading,
    NotFound,
    Found,
}

impl Status {
    fn of(view: &ProfileView) -> Self {
        if let Some(error) = view.error() {
            Self::Invalid(error.to_string())
        } else if view.profile().is_some() {
            Self::Found
        } else if view.is_loading() {
            Self::Loading
        } else {
            Self::NotFound
        }
    }
}

#[component]
fn ProfileHeader(view_state: RwSignal<ProfileView>) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let toggle_follow = move |_| {
        if let Some(notice) = view_state.try_update(ProfileView::toggle_follow) {
            state.notify(&notice);
        }
    };

    let can_edit = create_memo(move |_| view_state.with(ProfileView::can_edit));
    let is_own = create_memo(move |_| view_state.with(ProfileView::is_own_profile));
    let following = create_memo(move |_| view_state.with(ProfileView::is_following));
    let name = create_memo(move |_| {
        view_state.with(|v| v.profile().map(|u| u.name.clone()).unwrap_or_default())
    });
    let bio = create_memo(move |_| {
        view_state.with(|v| v.profile().map(|u| u.bio.clone()).unwrap_or_default())
    });

    view_state.with_untracked(|v| {
        let Some(user) = v.profile().cloned() else {
            return view! {}.into_view();
        };

        view! {
            <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
                <div class="h-24 bg-gradient-to-r from-blue-600 to-blue-400" />
                <div class="px-6 pb-6">
                    <div class="-mt-10 w-20 h-20 rounded-full bg-blue-700 border-4 border-white
                                text-white text-3xl font-bold flex items-center justify-center">
                        {user.initial().to_string()}
                    </div>
                    <div class="mt-3 flex items-start justify-between">
                        <div>
                            <h1 class="text-2xl font-bold text-gray-900">{name}</h1>
                            <p class="text-gray-500">{user.email.clone()}</p>
                            <p class="text-sm text-gray-400 mt-1">
                                "Joined " {format_date(user.created_at.with_timezone(&Local))}
                            </p>
                        </div>
                        {move || {
                            if can_edit.get() {
                                view! {
                                    <button
                                        on:click=move |_| view_state.update(ProfileView::begin_edit)
                                        class="px-4 py-2 border border-blue-600 text-blue-600
                                               hover:bg-blue-50 rounded-lg font-medium transition-colors"
                                    >
                                        "Edit Profile"
                                    </button>
                                }.into_view()
                            } else if !is_own.get() {
                                view! {
                                    <button
                                        on:click=toggle_follow
                                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white
                                               rounded-lg font-medium transition-colors"
                                    >
                                        {move || if following.get() {
                                            "Following"
                                        } else {
                                            "Follow"
                                        }}
                                    </button>
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                    </div>
                    <p class="mt-4 text-gray-700 whitespace-pre-wrap">{bio}</p>
                </div>
            </div>
        }
        .into_view()
    })
}

/// Modal form for editing one's own name and bio
#[component]
fn EditDialog(view_state: RwSignal<ProfileView>) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let session = expect_context::<SessionContext>();
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(token) = session.token() else {
            state.show_error("Please sign in to continue");
            return;
        };
        let request = view_state.with_untracked(|v| v.form().to_request());
        set_saving.set(true);

        spawn_local(async move {
            let result = api::update_profile(&token, &request).await;
            let notice = session
                .with_store(|store| view_state.try_update(|v| v.apply_edit(result, store)))
                .flatten();
            if let Some(notice) = notice {
                state.notify(&notice);
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 z-40 bg-black/50 flex items-center justify-center px-4">
            <form on:submit=on_submit class="w-full max-w-lg bg-white rounded-xl shadow-lg p-6 space-y-4">
                <h2 class="text-xl font-semibold text-gray-900">"Edit Profile"</h2>

                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Name"</span>
                    <input
                        type="text"
                        required=true
                        prop:value=move || view_state.with(|v| v.form().name.clone())
                        on:input=move |ev| view_state.update(|v| v.form_mut().name = event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </label>
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Bio"</span>
                    <textarea
                        rows="4"
                        prop:value=move || view_state.with(|v| v.form().bio.clone())
                        on:input=move |ev| view_state.update(|v| v.form_mut().bio = event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </label>

                <div class="flex justify-end space-x-2">
                    <button
                        type="button"
                        on:click=move |_| view_state.update(ProfileView::cancel_edit)
                        class="px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100 transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium transition-colors"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
