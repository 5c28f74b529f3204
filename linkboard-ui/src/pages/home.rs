//! Home Page
//!
//! Greeting, post composer and the full feed.

use leptos::*;

use linkboard::views::{greeting, Feed};

use crate::api;
use crate::components::{CreatePost, PostsList};
use crate::state::SessionContext;

#[component]
pub fn Home() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let feed = create_rw_signal(Feed::new());

    let refresh = move || {
        spawn_local(async move {
            let result = api::list_posts().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch posts: {}", e).into());
            }
            feed.try_update(|f| f.apply_posts(result));
        });
    };

    // Initial fetch
    refresh();

    let posts = Signal::derive(move || feed.with(|f| f.posts().to_vec()));
    let loading = Signal::derive(move || feed.with(Feed::is_loading));

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">
                    {move || session.user.with(|u| greeting(u.as_ref()))}
                </h1>
                <p class="text-gray-500 mt-1">"Share an update with your network"</p>
            </div>

            <CreatePost feed=feed on_created=Callback::new(move |_| refresh()) />

            <section class="space-y-4">
                <h2 class="text-xl font-semibold text-gray-900">"Recent Posts"</h2>
                <PostsList posts=posts loading=loading empty_text="No posts yet. Be the first to share!" />
            </section>
        </div>
    }
}
