// Injected extension registry
// Enables every extension the host exposes, aggregates their accounts and
// routes signer lookups back to the extension that owns an address.

use crate::error::RegistryError;
use crate::models::{ExtensionInfo, InjectedAccount, InjectedAccountWithMeta};
use crate::wallet_provider::WalletProvider;
use async_trait::async_trait;
use futures_util::future::join_all;
use log::{debug, warn};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One entry found under the host's injected-wallet object.
#[derive(Debug, Clone)]
pub struct DiscoveredExtension<X> {
    pub name: String,
    pub version: String,
    pub handle: X,
}

/// Source of installed extensions (in the browser, `window.injectedWeb3`).
pub trait ExtensionHost {
    type Extension: InjectedExtension;

    /// Extensions currently injected, in host order.
    fn injected_extensions(&self) -> Vec<DiscoveredExtension<Self::Extension>>;
}

/// An installed extension that has not been authorized yet.
#[async_trait(?Send)]
pub trait InjectedExtension {
    type Error;
    type Enabled: EnabledExtension<Error = Self::Error>;

    /// Request authorization for `origin`; extensions may prompt the user here.
    async fn enable(&self, origin: &str) -> Result<Self::Enabled, Self::Error>;
}

/// An extension that granted access.
#[async_trait(?Send)]
pub trait EnabledExtension {
    type Error;
    type Signer;

    async fn accounts(&self) -> Result<Vec<InjectedAccount>, Self::Error>;

    fn signer(&self) -> Self::Signer;
}

type EnabledOf<H> = <<H as ExtensionHost>::Extension as InjectedExtension>::Enabled;
type ErrorOf<H> = <<H as ExtensionHost>::Extension as InjectedExtension>::Error;

struct EnabledEntry<X> {
    info: ExtensionInfo,
    extension: X,
}

/// [`WalletProvider`] over every extension an [`ExtensionHost`] injects.
pub struct Web3Registry<H: ExtensionHost> {
    host: H,
    // Replaced wholesale on each enable; cloned out before any await.
    enabled: RefCell<Option<Rc<Vec<EnabledEntry<EnabledOf<H>>>>>>,
}

impl<H: ExtensionHost> Web3Registry<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            enabled: RefCell::new(None),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether `enable` has completed at least once.
    pub fn is_enabled(&self) -> bool {
        self.enabled.borrow().is_some()
    }

    /// Extensions authorized by the most recent `enable`.
    pub fn enabled_extensions(&self) -> Vec<ExtensionInfo> {
        self.enabled
            .borrow()
            .as_ref()
            .map(|entries| entries.iter().map(|e| e.info.clone()).collect())
            .unwrap_or_default()
    }

    fn snapshot(
        &self,
        operation: &'static str,
    ) -> Result<Rc<Vec<EnabledEntry<EnabledOf<H>>>>, RegistryError> {
        self.enabled
            .borrow()
            .clone()
            .ok_or(RegistryError::NotEnabled(operation))
    }

    /// Accounts of every enabled extension, tagged with their source.
    /// An extension whose listing fails contributes nothing.
    async fn collect_accounts(entries: &[EnabledEntry<EnabledOf<H>>]) -> Vec<InjectedAccountWithMeta>
    where
        ErrorOf<H>: fmt::Display,
    {
        let mut all = Vec::new();
        for entry in entries {
            match entry.extension.accounts().await {
                Ok(accounts) => {
                    all.extend(accounts.into_iter().map(|a| a.with_source(&entry.info.name)))
                }
                Err(e) => warn!("Error listing accounts of {}: {}", entry.info.name, e),
            }
        }
        all
    }
}

#[async_trait(?Send)]
impl<H> WalletProvider for Web3Registry<H>
where
    H: ExtensionHost,
    ErrorOf<H>: fmt::Display,
{
    type Signer = <EnabledOf<H> as EnabledExtension>::Signer;
    type Error = RegistryError;

    async fn enable(&self, app_name: &str) -> Result<Vec<ExtensionInfo>, Self::Error> {
        if app_name.is_empty() {
            return Err(RegistryError::MissingOrigin);
        }

        let discovered = self.host.injected_extensions();
        debug!("Found {} injected extension(s)", discovered.len());

        // All prompts are raised together; results keep discovery order
        let results = join_all(discovered.iter().map(|found| found.handle.enable(app_name))).await;

        let mut entries = Vec::with_capacity(discovered.len());
        for (found, result) in discovered.into_iter().zip(results) {
            match result {
                Ok(extension) => entries.push(EnabledEntry {
                    info: ExtensionInfo {
                        name: found.name,
                        version: found.version,
                    },
                    extension,
                }),
                Err(e) => warn!("Error initializing injected extension {}: {}", found.name, e),
            }
        }

        let infos = entries.iter().map(|e| e.info.clone()).collect();
        *self.enabled.borrow_mut() = Some(Rc::new(entries));
        Ok(infos)
    }

    async fn accounts(&self) -> Result<Vec<InjectedAccountWithMeta>, Self::Error> {
        let entries = self.snapshot("web3Accounts")?;
        Ok(Self::collect_accounts(&entries).await)
    }

    async fn signer_for_address(&self, address: &str) -> Result<Self::Signer, Self::Error> {
        let entries = self.snapshot("web3FromAddress")?;
        let accounts = Self::collect_accounts(&entries).await;

        let source = accounts
            .into_iter()
            .find(|a| a.address == address)
            .map(|a| a.meta.source)
            .ok_or_else(|| RegistryError::AccountNotFound(address.to_string()))?;

        entries
            .iter()
            .find(|e| e.info.name == source)
            .map(|e| e.extension.signer())
            .ok_or(RegistryError::SourceNotFound(source))
    }
}
