// Non-browser environment (server-side rendering, native tools)

use crate::models::{ExtensionInfo, InjectedAccountWithMeta};
use crate::wallet_provider::{HostEnvironment, WalletProvider};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Wallet connection only available in browser")]
pub struct HostUnavailable;

/// Environment without a display or any injected wallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl HostEnvironment for Headless {
    fn has_display(&self) -> bool {
        false
    }

    fn has_injected_wallet(&self) -> bool {
        false
    }
}

#[async_trait(?Send)]
impl WalletProvider for Headless {
    type Signer = ();
    type Error = HostUnavailable;

    async fn enable(&self, _app_name: &str) -> Result<Vec<ExtensionInfo>, HostUnavailable> {
        Err(HostUnavailable)
    }

    async fn accounts(&self) -> Result<Vec<InjectedAccountWithMeta>, HostUnavailable> {
        Err(HostUnavailable)
    }

    async fn signer_for_address(&self, _address: &str) -> Result<(), HostUnavailable> {
        Err(HostUnavailable)
    }
}
