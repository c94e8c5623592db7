// dotwallet WASM Bindings
// Browser wallet-extension connector for JavaScript callers
#![cfg(target_arch = "wasm32")]

use dotwallet_core::wasm::{to_js, BrowserHost, BrowserProvider};
use dotwallet_core::{
    connect_wallet as connect_accounts, get_wallet_signer as signer_for, is_extension_installed,
    truncate_address as truncate, ConnectorSettings,
};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod session;
pub use session::WalletSession;

thread_local! {
    static SETTINGS: RefCell<ConnectorSettings> = RefCell::new(ConnectorSettings::default());
    static PROVIDER: RefCell<Rc<BrowserProvider>> =
        RefCell::new(Rc::new(BrowserProvider::new(BrowserHost::default())));
}

// Initialize panic hook and logger for WASM
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(log::LevelFilter::Info);
}

pub(crate) fn provider() -> Rc<BrowserProvider> {
    PROVIDER.with(|p| p.borrow().clone())
}

pub(crate) fn settings() -> ConnectorSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Apply settings given as a JSON string. Missing fields take their defaults.
///
/// Replaces the shared provider, so extensions must be enabled again.
#[wasm_bindgen]
pub fn configure(settings_json: &str) -> Result<(), JsValue> {
    let settings = ConnectorSettings::from_json_str(settings_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse settings: {}", e)))?;
    let level = settings
        .level()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::set_max_level(level.to_level_filter());

    PROVIDER.with(|p| {
        *p.borrow_mut() = Rc::new(BrowserProvider::new(BrowserHost::new(
            settings.injected_marker.clone(),
        )))
    });
    info!("Wallet connector configured for {}", settings.app_name);
    SETTINGS.with(|s| *s.borrow_mut() = settings);
    Ok(())
}

/// Current settings as a JSON string
#[wasm_bindgen(js_name = getSettings)]
pub fn get_settings() -> Result<String, JsValue> {
    serde_json::to_string(&settings())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize settings: {}", e)))
}

/// Enable every injected extension for `app_name` and return all authorized
/// accounts as `{ address, name, source }[]` (`name` is `null` when unset).
///
/// Throws an `Error` when no extension responds. Extensions that reject or
/// fail to list accounts are logged and skipped.
#[wasm_bindgen(js_name = connectWallet)]
pub async fn connect_wallet(app_name: String) -> Result<JsValue, JsValue> {
    let provider = provider();
    let accounts = connect_accounts(&*provider, &app_name).await?;
    info!("Connected {} wallet account(s)", accounts.len());
    to_js(&accounts)
}

/// Whether a wallet extension is installed in this page.
///
/// Does not prompt; `true` does not mean the user has granted access.
#[wasm_bindgen(js_name = isWalletAvailable)]
pub fn is_wallet_available() -> bool {
    is_extension_installed(provider().host())
}

/// Signer object of the extension owning `address`. Requires a prior
/// `connectWallet` call.
#[wasm_bindgen(js_name = getWalletSigner)]
pub async fn get_wallet_signer(address: String) -> Result<JsValue, JsValue> {
    let provider = provider();
    Ok(signer_for(&*provider, &address).await?)
}

#[wasm_bindgen(js_name = truncateAddress)]
pub fn truncate_address(address: &str) -> String {
    truncate(address)
}
