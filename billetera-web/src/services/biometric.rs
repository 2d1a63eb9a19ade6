//! Biometric capability probe via the Credential Management API.
//!
//! The probe only checks that `navigator.credentials.create` exists; no
//! credential is ever requested, stored, or verified. Both probe outcomes
//! take the same simulated unlock path — the result is logged and
//! discarded. Only a thrown probe error reaches the failure branch.

use wasm_bindgen::JsValue;

/// Whether the browser exposes a credential-creation entry point.
pub fn platform_authenticator_available() -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let credentials = window.navigator().credentials();
    js_sys::Reflect::has(&credentials, &JsValue::from_str("create"))
}
