// Host abstraction - the wallet-extension API and the environment it lives in
// Browser builds bind these to window.injectedWeb3, tests use in-memory doubles

use crate::models::{ExtensionInfo, InjectedAccountWithMeta};
use async_trait::async_trait;
use std::fmt;

/// The injected wallet-extension API.
///
/// JavaScript futures are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Opaque signing capability handed out by an extension.
    type Signer;
    type Error: fmt::Display;

    /// Ask every detected extension to authorize `app_name`.
    /// Returns the extensions that responded.
    async fn enable(&self, app_name: &str) -> Result<Vec<ExtensionInfo>, Self::Error>;

    /// All currently authorized accounts across enabled extensions.
    async fn accounts(&self) -> Result<Vec<InjectedAccountWithMeta>, Self::Error>;

    /// Signer of the extension that owns `address`.
    async fn signer_for_address(&self, address: &str) -> Result<Self::Signer, Self::Error>;
}

/// Synchronous checks of the execution environment.
pub trait HostEnvironment {
    /// Whether an interactive display (a browser window) is present.
    fn has_display(&self) -> bool;

    /// Whether the injected-wallet marker object is present.
    fn has_injected_wallet(&self) -> bool;
}
