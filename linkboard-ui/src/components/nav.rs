//! Navigation Component
//!
//! Header bar with the brand, links for signed-in users and a logout button.

use leptos::*;
use leptos_router::*;

use linkboard::routes;

use crate::state::SessionContext;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let logout = move |_| {
        session.logout();
        navigate(routes::LOGIN, Default::default());
    };

    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=routes::HOME class="flex items-center space-x-2">
                        <span class="text-2xl font-bold text-blue-600">"Linkboard"</span>
                    </A>

                    {move || match session.user.get() {
                        Some(user) => view! {
                            <div class="flex items-center space-x-1">
                                <NavLink href=routes::HOME.to_string() label="Home" />
                                <NavLink href=routes::profile_path(&user.id) label="My Profile" />
                                <span class="px-3 text-sm text-gray-500">{user.name.clone()}</span>
                                <button
                                    on:click=logout.clone()
                                    class="px-4 py-2 rounded-lg text-gray-600 hover:text-red-600
                                           hover:bg-gray-100 transition-colors"
                                >
                                    "Logout"
                                </button>
                            </div>
                        }.into_view(),
                        None => view! {
                            <div class="flex items-center space-x-1">
                                <NavLink href=routes::LOGIN.to_string() label="Sign In" />
                                <NavLink href=routes::REGISTER.to_string() label="Join" />
                            </div>
                        }.into_view(),
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: String,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-blue-600 hover:bg-gray-100 transition-colors"
            active_class="text-blue-600 bg-blue-50"
        >
            {label}
        </A>
    }
}
