//! Registration Page
//!
//! Passwords are checked locally (match, minimum length) before anything is
//! sent. A strength meter and a completion bar update as the user types.

use leptos::*;
use leptos_router::*;

use linkboard::forms::RegisterForm;
use linkboard::routes;
use linkboard::views::{complete_auth, AuthKind};

use super::login::{Field, SubmitButton, INPUT_CLASS};
use crate::api;
use crate::components::PasswordMeter;
use crate::state::{GlobalState, SessionContext};

#[component]
pub fn Register() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let form = create_rw_signal(RegisterForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let password = Signal::derive(move || form.with(|f| f.password.clone()));
    let progress = Signal::derive(move || form.with(RegisterForm::progress));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = form.get();
        if let Err(e) = current.validate() {
            state.show_error(&e.to_string());
            return;
        }
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&current.to_request()).await;
            if let Some(outcome) =
                session.with_store(|s| complete_auth(result, s, AuthKind::Register))
            {
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
            <h1 class="text-2xl font-bold text-gray-900 mb-1">"Join Linkboard"</h1>
            <p class="text-gray-500 mb-4">"Make the most of your professional life"</p>

            <div class="h-1 bg-gray-200 rounded mb-6">
                <div
                    class="h-1 bg-blue-600 rounded transition-all"
                    style=move || format!("width: {}%", progress.get())
                />
            </div>

            <form on:submit=on_submit class="space-y-4">
                <Field label="Full name">
                    <input
                        type="text"
                        required=true
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </Field>
                <Field label="Email">
                    <input
                        type="email"
                        required=true
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </Field>
                <Field label="Password">
                    <input
                        type="password"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                    <PasswordMeter password=password />
                </Field>
                <Field label="Confirm password">
                    <input
                        type="password"
                        required=true
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| {
                            form.update(|f| f.confirm_password = event_target_value(&ev))
                        }
                        class=INPUT_CLASS
                    />
                </Field>

                <SubmitButton submitting=submitting label="Agree & Join" busy_label="Creating account..." />
            </form>

            <p class="mt-6 text-center text-sm text-gray-500">
                "Already on Linkboard? "
                <A href=routes::LOGIN class="text-blue-600 hover:underline">"Sign in"</A>
            </p>
        </div>
    }
}
