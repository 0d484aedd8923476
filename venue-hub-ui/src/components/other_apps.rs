//! Other Apps Modal
//!
//! Links to sibling campus apps from the configuration.

use leptos::*;

use crate::config::app_config;

#[component]
pub fn OtherAppsModal(open: RwSignal<bool>) -> impl IntoView {
    let apps = &app_config().other_apps;
    let close = move |_| open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/50" on:click=close>
                <div
                    class="bg-white dark:bg-gray-800 rounded-xl p-6 w-full max-w-md shadow-xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold">"Other Wits Apps"</h2>
                        <button class="text-gray-400 hover:text-gray-600" on:click=close>"✕"</button>
                    </div>

                    {if apps.is_empty() {
                        view! { <p class="text-gray-500">"No other apps are configured."</p> }.into_view()
                    } else {
                        view! {
                            <ul class="space-y-3">
                                {apps.iter().map(|app| view! {
                                    <li>
                                        <a
                                            href=app.url.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="block p-3 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                                        >
                                            <span class="font-medium">{app.name.clone()}</span>
                                            {app.description.clone().map(|text| view! {
                                                <p class="text-sm text-gray-500">{text}</p>
                                            })}
                                        </a>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
