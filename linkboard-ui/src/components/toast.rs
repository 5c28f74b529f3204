//! Toast
//!
//! Bottom-right stack showing the current success and error notices. Each
//! clears itself after a timeout; clicking one clears it early.

use leptos::*;
use linkboard::Notice;

use crate::state::GlobalState;

#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || state.success.get().map(|m| view! {
                <NoticeToast notice=Notice::Success(m) dismiss=state.success />
            })}
            {move || state.error.get().map(|m| view! {
                <NoticeToast notice=Notice::Error(m) dismiss=state.error />
            })}
        </div>
    }
}

#[component]
fn NoticeToast(notice: Notice, dismiss: RwSignal<Option<String>>) -> impl IntoView {
    let (icon, colors) = if notice.is_error() {
        ("✕", "bg-red-600")
    } else {
        ("✓", "bg-green-600")
    };

    view! {
        <button
            type="button"
            role="status"
            on:click=move |_| dismiss.set(None)
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 text-left animate-slide-in",
                colors
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message().to_string()}</span>
        </button>
    }
}
