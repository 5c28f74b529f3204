//! Post Composer
//!
//! Text area with a character counter. Publishing goes through the shared
//! feed state so validation and messages match the terminal client.

use leptos::*;

use linkboard::forms::{post_counter, MAX_POST_LEN};
use linkboard::views::Feed;

use crate::api;
use crate::components::InlineLoading;
use crate::state::{GlobalState, SessionContext};

#[component]
pub fn CreatePost(
    /// Feed state the composer submits through
    feed: RwSignal<Feed>,
    /// Called after a post is accepted so the page can re-fetch
    on_created: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let session = expect_context::<SessionContext>();

    let (content, set_content) = create_signal(String::new());
    let submitting = Signal::derive(move || feed.with(Feed::is_submitting));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = content.get();
        let token = session.token();
        let Some(ready) = feed.try_update(|f| f.begin_create(token.as_deref(), &text)) else {
            return;
        };
        let (token, request) = match ready {
            Ok(ready) => ready,
            Err(notice) => {
                state.notify(&notice);
                return;
            }
        };

        spawn_local(async move {
            let result = api::create_post(&token, &request).await;
            if let Some(notice) = feed.try_update(|f| f.finish_create(result)) {
                state.notify(&notice);
                if !notice.is_error() {
                    set_content.set(String::new());
                    on_created.call(());
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-xl shadow-sm border border-gray-200 p-5 space-y-3">
            <textarea
                rows="3"
                maxlength=MAX_POST_LEN.to_string()
                placeholder="What's on your mind?"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
                class="w-full resize-none rounded-lg border border-gray-300 px-4 py-3
                       focus:border-blue-500 focus:outline-none"
            />
            <div class="flex items-center justify-between">
                <span class="text-xs text-gray-500">{move || content.with(|c| post_counter(c))}</span>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-5 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium transition-colors
                           flex items-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <InlineLoading />
                            <span>"Posting..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Post"</span> }.into_view()
                    }}
                </button>
            </div>
        </form>
    }
}
