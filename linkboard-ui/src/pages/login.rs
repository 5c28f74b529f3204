//! Login Page

use leptos::*;
use leptos_router::*;

use linkboard::forms::LoginForm;
use linkboard::routes;
use linkboard::views::{complete_auth, AuthKind};

use crate::api;
use crate::components::{ApiSettings, InlineLoading};
use crate::state::{GlobalState, SessionContext};

#[component]
pub fn Login() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&form.to_request()).await;
            if let Some(outcome) = session.with_store(|s| complete_auth(result, s, AuthKind::Login)) {
                state.notify(&outcome.notice());
                if let Some(to) = outcome.redirect() {
                    navigate(to, Default::default());
                    return;
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12 bg-white rounded-xl shadow-sm border border-gray-200 p-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-1">"Welcome back"</h1>
            <p class="text-gray-500 mb-6">"Sign in to your professional network"</p>

            <form on:submit=on_submit class="space-y-4">
                <Field label="Email">
                    <input
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </Field>
                <Field label="Password">
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </Field>

                <SubmitButton submitting=submitting label="Sign In" busy_label="Signing in..." />
            </form>

            <p class="mt-6 text-center text-sm text-gray-500">
                "New to Linkboard? "
                <A href=routes::REGISTER class="text-blue-600 hover:underline">"Join now"</A>
            </p>
            <ApiSettings />
        </div>
    }
}

pub(crate) const INPUT_CLASS: &str = "w-full rounded-lg border border-gray-300 px-4 py-3 \
     focus:border-blue-500 focus:outline-none";

/// Labelled form row
#[component]
pub(crate) fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            {children()}
        </label>
    }
}

#[component]
pub(crate) fn SubmitButton(
    #[prop(into)]
    submitting: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || submitting.get()
            class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                   disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold
                   transition-colors flex items-center justify-center space-x-2"
        >
            {move || if submitting.get() {
                view! {
                    <InlineLoading />
                    <span>{busy_label}</span>
                }.into_view()
            } else {
                view! { <span>{label}</span> }.into_view()
            }}
        </button>
    }
}
