//! Loading Component
//!
//! Placeholders shown while auth or the role lookup is pending.

use leptos::*;

/// Full-page loading placeholder
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen space-y-3">
            <div class="loading-spinner w-8 h-8" />
            <span class="text-gray-500">"Loading..."</span>
        </div>
    }
}

/// Skeleton loader for menu entries
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 dark:bg-gray-700 rounded h-10" />
            }).collect_view()}
        </div>
    }
}
