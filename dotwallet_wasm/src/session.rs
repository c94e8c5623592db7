// Wallet session exposed to JavaScript
// Tracks the connect lifecycle and the selected account for UI code

use crate::{provider, settings};
use dotwallet_core::wasm::to_js;
use dotwallet_core::{connect_wallet, get_wallet_signer, ConnectorSettings, WalletState};
use js_sys::Promise;
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

#[wasm_bindgen]
pub struct WalletSession {
    settings: ConnectorSettings,
    state: Rc<RefCell<WalletState>>,
}

#[wasm_bindgen]
impl WalletSession {
    /// New session using the settings last passed to `configure`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            settings: settings(),
            state: Rc::new(RefCell::new(WalletState::default())),
        }
    }

    /// Authorize the app with every extension and load accounts.
    /// Resolves to the session state; rejects with the connect error.
    #[wasm_bindgen]
    pub fn connect(&self) -> Promise {
        let state = self.state.clone();
        let settings = self.settings.clone();
        state.borrow_mut().begin_connect();

        future_to_promise(async move {
            let provider = provider();
            match connect_wallet(&*provider, &settings.app_name).await {
                Ok(accounts) => {
                    let mut state = state.borrow_mut();
                    state.apply_accounts(accounts, settings.auto_select_first);
                    if let Some(error) = &state.error {
                        warn!("{}", error);
                    } else {
                        info!("Wallet session connected with {} account(s)", state.accounts.len());
                    }
                    to_js(&*state)
                }
                Err(e) => {
                    state.borrow_mut().fail(e.to_string());
                    Err(e.into())
                }
            }
        })
    }

    /// Select one of the connected accounts. Returns false for unknown addresses.
    #[wasm_bindgen(js_name = selectAccount)]
    pub fn select_account(&self, address: &str) -> bool {
        self.state.borrow_mut().select(address)
    }

    #[wasm_bindgen(js_name = selectedAddress)]
    pub fn selected_address(&self) -> Option<String> {
        self.state.borrow().selected_address().map(str::to_string)
    }

    #[wasm_bindgen(js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    /// Session state as `{ connected, loading, accounts, selected_account, error }`
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&*self.state.borrow())
    }

    /// Signer for the selected account
    #[wasm_bindgen]
    pub fn signer(&self) -> Promise {
        let address = self.selected_address();
        future_to_promise(async move {
            let address = address
                .ok_or_else(|| JsValue::from(js_sys::Error::new("No account selected")))?;
            let provider = provider();
            Ok(get_wallet_signer(&*provider, &address).await?)
        })
    }

    #[wasm_bindgen]
    pub fn disconnect(&self) {
        self.state.borrow_mut().disconnect();
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}
