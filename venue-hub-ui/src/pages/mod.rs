//! Page Components
//!
//! One view per route.

pub mod auth;
pub mod not_found;
pub mod placeholder;
pub mod profile;

pub use auth::{SignIn, SignUp};
pub use not_found::NotFound;
pub use placeholder::PlaceholderPage;
pub use profile::Profile;

use leptos::*;

use venue_hub::AppRoute;

/// View for a route the gate decided to render
pub fn page_for(route: AppRoute) -> View {
    match route {
        AppRoute::SignIn => view! { <SignIn /> }.into_view(),
        AppRoute::SignUp => view! { <SignUp /> }.into_view(),
        AppRoute::Profile => view! { <Profile /> }.into_view(),
        route => view! { <PlaceholderPage route=route /> }.into_view(),
    }
}
