//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use linkboard::{resolve, Resolution};

use crate::components::{Nav, Toast};
use crate::pages::{Home, Login, Profile, Register};
use crate::state::{provide_global_state, provide_session, SessionContext};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/login" view=|| view! { <Guarded><Login /></Guarded> } />
                        <Route path="/register" view=|| view! { <Guarded><Register /></Guarded> } />
                        <Route path="/" view=|| view! { <Guarded><Home /></Guarded> } />
                        <Route path="/profile" view=|| view! { <Guarded><Profile /></Guarded> } />
                        <Route path="/profile/:user_id" view=|| view! { <Guarded><Profile /></Guarded> } />
                        <Route path="/*any" view=|| view! { <Guarded><Home /></Guarded> } />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// Renders its children only when the router rules allow the current path
/// for the current viewer, otherwise redirects.
#[component]
fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();

    let resolution = create_memo(move |_| {
        let path = location.pathname.get();
        session.user.with(|user| resolve(&path, user.as_ref()))
    });

    move || match resolution.get() {
        Resolution::Redirect(to) => view! { <Redirect path=to /> }.into_view(),
        Resolution::Render(_) => children().into_view(),
    }
}
