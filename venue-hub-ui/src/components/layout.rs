//! Layout Shell
//!
//! Navigation frame around every authenticated page.

use leptos::*;

use crate::components::{OtherAppsModal, Sidebar};
use crate::state::{provide_nav_context, use_global_state};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let state = use_global_state();
    let nav = provide_nav_context();

    view! {
        <div class=move || if state.is_mobile() { "min-h-screen" } else { "flex min-h-screen" }>
            <Sidebar />
            <main class=move || {
                if state.is_mobile() { "flex-1 px-4 py-6 pb-32" } else { "flex-1 px-8 py-8 overflow-y-auto h-screen" }
            }>
                {children()}
            </main>
            <OtherAppsModal open=nav.other_apps_open />
        </div>
    }
}
