// Wallet connector - authorization, account listing and signer lookup
// Each call is a single round trip to the provider; failures are logged and returned as-is

use crate::error::WalletError;
use crate::models::WalletAccount;
use crate::wallet_provider::{HostEnvironment, WalletProvider};
use log::{debug, error};

pub type WalletResult<T, E> = Result<T, WalletError<E>>;

/// Enable all detected extensions for `app_name` and list their accounts.
///
/// Fails with [`WalletError::NoExtension`] when no extension responds. Any
/// provider failure is logged and returned unchanged; there is no retry and
/// no partial result.
pub async fn connect_wallet<P>(provider: &P, app_name: &str) -> WalletResult<Vec<WalletAccount>, P::Error>
where
    P: WalletProvider + ?Sized,
{
    let result: WalletResult<Vec<WalletAccount>, P::Error> = async {
        let extensions = provider.enable(app_name).await.map_err(WalletError::Upstream)?;
        if extensions.is_empty() {
            return Err(WalletError::NoExtension);
        }
        debug!(
            "Enabled {} wallet extension(s): {:?}",
            extensions.len(),
            extensions.iter().map(|e| e.name.as_str()).collect::<Vec<_>>()
        );

        let accounts = provider.accounts().await.map_err(WalletError::Upstream)?;
        Ok(accounts.into_iter().map(WalletAccount::from).collect())
    }
    .await;

    if let Err(e) = &result {
        error!("Failed to connect wallet: {}", e);
    }
    result
}

/// Whether a wallet extension is installed.
///
/// This only checks for the injected marker object. It never prompts, and a
/// `true` result says nothing about whether the user will grant access.
pub fn is_extension_installed<H>(env: &H) -> bool
where
    H: HostEnvironment + ?Sized,
{
    if !env.has_display() {
        return false;
    }
    env.has_injected_wallet()
}

/// Signer of the extension owning `address`, exactly as the provider returns it.
///
/// The address is not validated here; unknown or malformed addresses are the
/// provider's to reject.
pub async fn get_wallet_signer<P>(provider: &P, address: &str) -> WalletResult<P::Signer, P::Error>
where
    P: WalletProvider + ?Sized,
{
    provider.signer_for_address(address).await.map_err(|e| {
        error!("Failed to get signer for {}: {}", address, e);
        WalletError::Upstream(e)
    })
}
