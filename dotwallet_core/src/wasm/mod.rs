// WASM-specific implementations
pub mod error;
pub mod injected;

// Re-exports
pub use error::*;
pub use injected::*;

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Provider bound to the extensions injected into the current page.
pub type BrowserProvider = crate::registry::Web3Registry<BrowserHost>;

/// Convert a value for JavaScript. `None` becomes `null`, not `undefined`.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
