//! Bindings to the Clerk browser SDK exposed as `window.Clerk`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// The SDK singleton
    #[derive(Clone)]
    pub type Clerk;

    #[wasm_bindgen(method, catch)]
    pub async fn load(this: &Clerk) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter)]
    pub fn user(this: &Clerk) -> Option<ClerkUser>;

    #[wasm_bindgen(method, getter)]
    pub fn session(this: &Clerk) -> Option<ClerkSession>;

    #[wasm_bindgen(method, catch, js_name = signOut)]
    pub async fn sign_out(this: &Clerk) -> Result<JsValue, JsValue>;

    /// Called with the new resources whenever the session changes
    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Clerk, callback: &Closure<dyn FnMut(JsValue)>) -> JsValue;

    #[wasm_bindgen(method, js_name = mountSignIn)]
    pub fn mount_sign_in(this: &Clerk, node: &web_sys::HtmlDivElement);

    #[wasm_bindgen(method, js_name = unmountSignIn)]
    pub fn unmount_sign_in(this: &Clerk, node: &web_sys::HtmlDivElement);

    #[wasm_bindgen(method, js_name = mountSignUp)]
    pub fn mount_sign_up(this: &Clerk, node: &web_sys::HtmlDivElement);

    #[wasm_bindgen(method, js_name = unmountSignUp)]
    pub fn unmount_sign_up(this: &Clerk, node: &web_sys::HtmlDivElement);

    pub type ClerkUser;

    #[wasm_bindgen(method, getter)]
    pub fn id(this: &ClerkUser) -> String;

    pub type ClerkSession;

    /// Resolves to the session JWT, or `null` when signed out
    #[wasm_bindgen(method, catch, js_name = getToken)]
    pub async fn get_token(this: &ClerkSession) -> Result<JsValue, JsValue>;
}

/// The SDK instance, if the script has loaded
pub fn instance() -> Option<Clerk> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("Clerk")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value.unchecked_into())
}
