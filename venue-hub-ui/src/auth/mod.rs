//! Authentication
//!
//! Session status from the Clerk SDK, exposed to components as reactive state.

pub mod clerk;

use leptos::*;
use wasm_bindgen::prelude::*;

use venue_hub::SessionStatus;

/// Auth state provided to all components
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub status: RwSignal<SessionStatus>,
}

impl AuthContext {
    /// Re-read the signed-in user from the SDK
    fn refresh(&self, clerk: &clerk::Clerk) {
        let next = match clerk.user() {
            Some(user) => SessionStatus::signed_in(user.id()),
            None => SessionStatus::SignedOut,
        };

        if self.status.with_untracked(|current| *current != next) {
            tracing::info!(signed_in = next.is_signed_in(), "Session changed");
            self.status.set(next);
        }
    }

    /// Fresh session token for API calls
    pub async fn token(&self) -> Result<String, String> {
        let clerk = clerk::instance().ok_or("Auth SDK not loaded")?;
        let session = clerk.session().ok_or("No active session")?;
        let token = session
            .get_token()
            .await
            .map_err(|e| format!("Token request failed: {:?}", e))?;

        token.as_string().ok_or_else(|| "No token issued".to_string())
    }

    /// Sign out; the SDK listener moves the status to `SignedOut`
    pub fn sign_out(&self) {
        spawn_local(async move {
            let Some(clerk) = clerk::instance() else {
                return;
            };
            if let Err(e) = clerk.sign_out().await {
                tracing::error!("Sign out failed: {:?}", e);
            }
        });
    }
}

/// Load the SDK and provide [`AuthContext`] to the component tree
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext {
        status: create_rw_signal(SessionStatus::Unresolved),
    };
    provide_context(auth);

    spawn_local(async move {
        let Some(clerk) = clerk::instance() else {
            tracing::error!("Clerk SDK not found on window");
            auth.status.set(SessionStatus::SignedOut);
            return;
        };

        if let Err(e) = clerk.load().await {
            tracing::error!("Failed to load Clerk: {:?}", e);
            auth.status.set(SessionStatus::SignedOut);
            return;
        }

        auth.refresh(&clerk);

        let listener_clerk = clerk.clone();
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |_resources: JsValue| {
            auth.refresh(&listener_clerk);
        });
        clerk.add_listener(&listener);
        // Lives for the whole page session
        listener.forget();
    });

    auth
}

/// Auth context of the current component tree
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found")
}
