// Browser bindings for extensions injected under window.injectedWeb3
//
// Each entry looks like `{ version, enable(origin) -> Promise<Injected> }`
// where `Injected` carries `accounts.get() -> Promise<InjectedAccount[]>`
// and an opaque `signer`.

use crate::models::InjectedAccount;
use crate::registry::{DiscoveredExtension, EnabledExtension, ExtensionHost, InjectedExtension};
use crate::wallet_provider::HostEnvironment;
use crate::wasm::error::JsHostError;
use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsHostError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(JsHostError::Js)
}

fn method(target: &JsValue, key: &str) -> Result<Function, JsHostError> {
    get(target, key)?
        .dyn_into::<Function>()
        .map_err(|_| JsHostError::Malformed(format!("{} is not a function", key)))
}

/// Await a value that may or may not be a promise.
async fn settle(value: JsValue) -> Result<JsValue, JsHostError> {
    JsFuture::from(Promise::resolve(&value))
        .await
        .map_err(JsHostError::Js)
}

/// The current page, inspected through `web_sys::window()`.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    marker: String,
}

impl BrowserHost {
    pub fn new(marker: impl Into<String>) -> Self {
        Self { marker: marker.into() }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    fn injected_object(&self) -> Option<JsValue> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str(&self.marker))
            .ok()
            .filter(|v| v.is_object())
    }
}

impl Default for BrowserHost {
    fn default() -> Self {
        Self::new("injectedWeb3")
    }
}

impl HostEnvironment for BrowserHost {
    fn has_display(&self) -> bool {
        web_sys::window().is_some()
    }

    fn has_injected_wallet(&self) -> bool {
        web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str(&self.marker)).ok())
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    }
}

impl ExtensionHost for BrowserHost {
    type Extension = JsInjectedExtension;

    fn injected_extensions(&self) -> Vec<DiscoveredExtension<JsInjectedExtension>> {
        let injected = match self.injected_object() {
            Some(obj) => obj,
            None => {
                debug!("window.{} not present", self.marker);
                return Vec::new();
            }
        };

        Object::entries(injected.unchecked_ref())
            .iter()
            .filter_map(|entry| {
                let pair: Array = entry.unchecked_into();
                let name = pair.get(0).as_string()?;
                let handle = pair.get(1);
                let version = get(&handle, "version")
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                Some(DiscoveredExtension {
                    name,
                    version,
                    handle: JsInjectedExtension(handle),
                })
            })
            .collect()
    }
}

/// A `window.injectedWeb3[name]` entry.
#[derive(Debug, Clone)]
pub struct JsInjectedExtension(pub JsValue);

#[async_trait(?Send)]
impl InjectedExtension for JsInjectedExtension {
    type Error = JsHostError;
    type Enabled = JsEnabledExtension;

    async fn enable(&self, origin: &str) -> Result<JsEnabledExtension, JsHostError> {
        let enable = method(&self.0, "enable")?;
        let pending = enable
            .call1(&self.0, &JsValue::from_str(origin))
            .map_err(JsHostError::Js)?;
        let injected = settle(pending).await?;
        if !injected.is_object() {
            return Err(JsHostError::Malformed("enable did not resolve to an object".to_string()));
        }
        Ok(JsEnabledExtension(injected))
    }
}

/// The `Injected` object an extension resolves with after authorization.
#[derive(Debug, Clone)]
pub struct JsEnabledExtension(pub JsValue);

#[async_trait(?Send)]
impl EnabledExtension for JsEnabledExtension {
    type Error = JsHostError;
    type Signer = JsValue;

    async fn accounts(&self) -> Result<Vec<InjectedAccount>, JsHostError> {
        let accounts = get(&self.0, "accounts")?;
        let list = method(&accounts, "get")?;
        let pending = list.call0(&accounts).map_err(JsHostError::Js)?;
        let value = settle(pending).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| JsHostError::Decode(e.to_string()))
    }

    fn signer(&self) -> JsValue {
        get(&self.0, "signer").unwrap_or(JsValue::UNDEFINED)
    }
}
