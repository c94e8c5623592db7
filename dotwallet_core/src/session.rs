// Wallet session state shared with the UI layer

use crate::models::WalletAccount;
use serde::{Deserialize, Serialize};

pub const NO_ACCOUNTS_MESSAGE: &str = "No accounts found in wallet";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletState {
    pub connected: bool,
    pub loading: bool,
    pub accounts: Vec<WalletAccount>,
    pub selected_account: Option<WalletAccount>,
    pub error: Option<String>,
}

impl WalletState {
    pub fn begin_connect(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the accounts returned by a successful connect.
    /// With `auto_select_first` the first account becomes the selection.
    pub fn apply_accounts(&mut self, accounts: Vec<WalletAccount>, auto_select_first: bool) {
        self.loading = false;
        if accounts.is_empty() {
            self.accounts.clear();
            self.selected_account = None;
            self.connected = false;
            self.error = Some(NO_ACCOUNTS_MESSAGE.to_string());
            return;
        }

        // Keep the previous selection if the account is still exposed
        let previous = self
            .selected_account
            .take()
            .and_then(|s| accounts.iter().find(|a| **a == s).cloned());
        self.selected_account = previous.or_else(|| {
            if auto_select_first {
                accounts.first().cloned()
            } else {
                None
            }
        });
        self.accounts = accounts;
        self.connected = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Select the stored account with `address`. Unknown addresses leave the
    /// selection untouched.
    pub fn select(&mut self, address: &str) -> bool {
        match self.accounts.iter().find(|a| a.address == address) {
            Some(account) => {
                self.selected_account = Some(account.clone());
                true
            }
            None => false,
        }
    }

    pub fn disconnect(&mut self) {
        *self = Self::default();
    }

    pub fn selected_address(&self) -> Option<&str> {
        self.selected_account.as_ref().map(|a| a.address.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(address: &str, source: &str) -> WalletAccount {
        WalletAccount {
            address: address.to_string(),
            name: None,
            source: source.to_string(),
        }
    }

    #[test]
    fn connect_selects_first_account() {
        let mut state = WalletState::default();
        state.begin_connect();
        assert!(state.loading);

        state.apply_accounts(vec![account("5Fabc", "talisman"), account("5Fdef", "talisman")], true);
        assert!(state.connected);
        assert!(!state.loading);
        assert_eq!(state.selected_address(), Some("5Fabc"));
    }

    #[test]
    fn no_auto_select_leaves_selection_empty() {
        let mut state = WalletState::default();
        state.apply_accounts(vec![account("5Fabc", "talisman")], false);
        assert!(state.connected);
        assert_eq!(state.selected_account, None);
    }

    #[test]
    fn empty_account_list_is_an_error() {
        let mut state = WalletState::default();
        state.begin_connect();
        state.apply_accounts(Vec::new(), true);
        assert!(!state.connected);
        assert_eq!(state.error.as_deref(), Some(NO_ACCOUNTS_MESSAGE));
    }

    #[test]
    fn reconnect_keeps_existing_selection() {
        let mut state = WalletState::default();
        state.apply_accounts(vec![account("5Fabc", "talisman"), account("5Fdef", "talisman")], true);
        assert!(state.select("5Fdef"));
        state.apply_accounts(vec![account("5Fabc", "talisman"), account("5Fdef", "talisman")], true);
        assert_eq!(state.selected_address(), Some("5Fdef"));
    }

    #[test]
    fn select_unknown_address_is_ignored() {
        let mut state = WalletState::default();
        state.apply_accounts(vec![account("5Fabc", "talisman")], true);
        assert!(!state.select("5Fzzz"));
        assert_eq!(state.selected_address(), Some("5Fabc"));
    }

    #[test]
    fn failure_clears_loading_and_disconnect_resets() {
        let mut state = WalletState::default();
        state.begin_connect();
        state.fail("Rejected by user");
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Rejected by user"));

        state.disconnect();
        assert_eq!(state, WalletState::default());
    }
}
