//! Sign-in and sign-up pages backed by the Clerk SDK widgets.

use leptos::html::Div;
use leptos::*;

use crate::auth::clerk;

#[derive(Clone, Copy)]
enum Widget {
    SignIn,
    SignUp,
}

#[component]
pub fn SignIn() -> impl IntoView {
    view! { <AuthWidget widget=Widget::SignIn /> }
}

#[component]
pub fn SignUp() -> impl IntoView {
    view! { <AuthWidget widget=Widget::SignUp /> }
}

/// Mounts the SDK widget into a container once it is in the DOM
#[component]
fn AuthWidget(widget: Widget) -> impl IntoView {
    let container = create_node_ref::<Div>();

    container.on_load(move |node| {
        let Some(clerk) = clerk::instance() else {
            tracing::error!("Clerk SDK not available; cannot mount auth widget");
            return;
        };
        match widget {
            Widget::SignIn => clerk.mount_sign_in(&node),
            Widget::SignUp => clerk.mount_sign_up(&node),
        }
    });

    on_cleanup(move || {
        let (Some(clerk), Some(node)) = (clerk::instance(), container.get_untracked()) else {
            return;
        };
        match widget {
            Widget::SignIn => clerk.unmount_sign_in(&node),
            Widget::SignUp => clerk.unmount_sign_up(&node),
        }
    });

    view! {
        <div class="flex items-center justify-center min-h-screen">
            <div node_ref=container />
        </div>
    }
}
