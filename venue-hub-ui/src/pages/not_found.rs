//! 404 placeholder.

use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen text-gray-500">
            "No Route Found"
        </div>
    }
}
