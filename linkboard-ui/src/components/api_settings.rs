//! API Server Settings
//!
//! Lets the viewer point the app at another API origin. The choice is kept
//! in `localStorage`; a blank value goes back to the default.

use leptos::*;

use crate::api;
use crate::state::GlobalState;

#[component]
pub fn ApiSettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let (open, set_open) = create_signal(false);
    let (url, set_url) = create_signal(api::get_api_base());

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let base = api::set_api_base(&url.get());
        set_url.set(base.clone());
        state.show_success(&format!("API server set to {}", base));
    };

    view! {
        <div class="mt-4 text-center text-xs text-gray-400">
            <button
                type="button"
                class="hover:underline"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "Hide server settings" } else { "Server settings" }}
            </button>
            <Show when=move || open.get()>
                <form on:submit=on_save class="mt-2 flex space-x-2">
                    <input
                        type="url"
                        placeholder=linkboard::api::DEFAULT_API_BASE
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                        class="flex-1 rounded-lg border border-gray-300 px-3 py-2 text-sm text-gray-700"
                    />
                    <button
                        type="submit"
                        class="rounded-lg bg-gray-100 hover:bg-gray-200 px-3 py-2 text-sm text-gray-700"
                    >
                        "Save"
                    </button>
                </form>
            </Show>
        </div>
    }
}
