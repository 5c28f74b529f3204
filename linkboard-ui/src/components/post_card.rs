//! Post Components
//!
//! A single post and the list used by the feed and profile pages.

use chrono::Local;
use leptos::*;
use leptos_router::*;

use linkboard::models::Post;
use linkboard::routes;
use linkboard::timefmt::format_relative;

use super::Loading;

/// One post: author avatar, name, relative time and content
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let when = format_relative(Local::now(), post.created_at.with_timezone(&Local));

    view! {
        <article class="bg-white rounded-xl shadow-sm border border-gray-200 p-5">
            <header class="flex items-center space-x-3 mb-3">
                <div class="w-10 h-10 rounded-full bg-blue-600 text-white flex items-center
                            justify-center font-semibold">
                    {post.author.initial().to_string()}
                </div>
                <div>
                    <A
                        href=routes::profile_path(&post.user_id)
                        class="font-semibold text-gray-900 hover:text-blue-600"
                    >
                        {post.author.name.clone()}
                    </A>
                    <p class="text-xs text-gray-500">{when}</p>
                </div>
            </header>
            <p class="text-gray-800 whitespace-pre-wrap">{post.content}</p>
        </article>
    }
}

/// Posts in the order given, with loading and empty states
#[component]
pub fn PostsList(
    #[prop(into)]
    posts: Signal<Vec<Post>>,
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(default = "No posts yet.")]
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if loading.get() && posts.with(Vec::is_empty) {
                view! { <Loading /> }.into_view()
            } else if posts.with(Vec::is_empty) {
                view! {
                    <p class="text-center text-gray-500 py-8">{empty_text}</p>
                }.into_view()
            } else {
                view! {
                    <div class="space-y-4">
                        <For
                            each=move || posts.get()
                            key=|post| post.id.clone()
                            children=|post| view! { <PostCard post=post /> }
                        />
                    </div>
                }.into_view()
            }
        }}
    }
}
