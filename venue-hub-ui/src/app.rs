//! App Root Component
//!
//! Auth gate, routing and global providers.

use leptos::*;
use leptos_router::*;

use venue_hub::{resolve, RouteDecision};

use crate::auth::{provide_auth, use_auth};
use crate::components::{Layout, Loading};
use crate::pages::{page_for, NotFound};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let auth = provide_auth();

    // No route decision until the provider has loaded
    let resolved = create_memo(move |_| auth.status.with(|status| status.is_resolved()));

    move || {
        if resolved.get() {
            view! {
                <Router>
                    <Routes>
                        <Route path="/*any" view=Gate />
                    </Routes>
                </Router>
            }
            .into_view()
        } else {
            view! { <Loading /> }.into_view()
        }
    }
}

/// Applies the routing decision for the current location
#[component]
fn Gate() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    let decision = create_memo(move |_| {
        let path = location.pathname.get();
        auth.status.with(|status| resolve(status, &path))
    });

    // Keep the layout shell mounted while moving between protected pages
    let in_shell = create_memo(move |_| {
        matches!(decision.get(), RouteDecision::Render(route) if !route.is_public())
    });

    move || {
        if in_shell.get() {
            view! {
                <Layout>
                    <ShellPage decision=decision />
                </Layout>
            }
            .into_view()
        } else {
            match decision.get() {
                RouteDecision::Loading => view! { <Loading /> }.into_view(),
                RouteDecision::Redirect(route) => view! { <Redirect path=route.path() /> }.into_view(),
                RouteDecision::NotFound => view! { <NotFound /> }.into_view(),
                RouteDecision::Render(route) => page_for(route),
            }
        }
    }
}

/// Page inside the layout shell
#[component]
fn ShellPage(decision: Memo<RouteDecision>) -> impl IntoView {
    move || match decision.get() {
        RouteDecision::Render(route) => page_for(route),
        _ => ().into_view(),
    }
}
