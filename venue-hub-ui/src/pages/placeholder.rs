//! Placeholder Page
//!
//! Heading for routes whose page bodies are served by feature modules.

use leptos::*;

use venue_hub::AppRoute;

#[component]
pub fn PlaceholderPage(route: AppRoute) -> impl IntoView {
    let subtitle = match &route {
        AppRoute::Venue { id } => format!("Venue {}", id),
        other => other.path(),
    };

    view! {
        <div class="space-y-2">
            <h1 class="text-3xl font-bold">{route.title()}</h1>
            <p class="text-gray-500">{subtitle}</p>
        </div>
    }
}
