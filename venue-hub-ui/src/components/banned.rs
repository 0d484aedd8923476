//! Banned Notice
//!
//! Replaces all navigation when the account is banned.

use leptos::*;

use crate::auth::use_auth;

#[component]
pub fn BannedNotice() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-white dark:bg-gray-900 text-center px-6">
            <div class="text-6xl mb-4">"⛔"</div>
            <h1 class="text-3xl font-bold mb-2">"Account Suspended"</h1>
            <p class="text-gray-500 mb-6 max-w-md">
                "Your access to venue booking has been suspended. Contact campus facilities if you think this is a mistake."
            </p>
            <button
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                on:click=move |_| auth.sign_out()
            >
                "Log Out"
            </button>
        </div>
    }
}
