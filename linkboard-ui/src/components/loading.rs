//! Spinners shown while requests are in flight.

use leptos::*;

/// Centered spinner for a section that has nothing to show yet
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12" aria-busy="true">
            <Spinner size="w-8 h-8" />
        </div>
    }
}

/// Small spinner for use inside buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! { <Spinner size="w-4 h-4" /> }
}

#[component]
fn Spinner(size: &'static str) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block rounded-full border-2 border-current border-t-transparent animate-spin {}",
            size
        ) />
    }
}
