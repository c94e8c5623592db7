// Errors crossing the JavaScript boundary

use crate::error::{RegistryError, WalletError};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug, Clone)]
pub enum JsHostError {
    /// Value thrown or rejected by extension code
    #[error("{}", describe(.0))]
    Js(JsValue),

    #[error("Malformed injected extension: {0}")]
    Malformed(String),

    #[error("Failed to decode accounts: {0}")]
    Decode(String),
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type BrowserWalletError = WalletError<RegistryError>;

impl From<BrowserWalletError> for JsValue {
    fn from(err: BrowserWalletError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
