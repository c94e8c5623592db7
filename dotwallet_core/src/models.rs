use serde::{Deserialize, Serialize};

/// A single account surfaced by a wallet extension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletAccount {
    /// Chain-specific encoded address, passed through as-is.
    pub address: String,
    /// `None` when the extension supplied no name or an empty one.
    pub name: Option<String>,
    /// Name of the extension that supplied the account (e.g. "talisman").
    pub source: String,
}

impl WalletAccount {
    /// Address shortened to `first6...last4` when longer than 12 characters.
    pub fn short_address(&self) -> String {
        truncate_address(&self.address)
    }

    /// Label for account pickers: the name, or the short address without one.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.short_address())
    }
}

impl From<InjectedAccountWithMeta> for WalletAccount {
    fn from(account: InjectedAccountWithMeta) -> Self {
        Self {
            address: account.address,
            name: account.meta.name.filter(|n| !n.is_empty()),
            source: account.meta.source,
        }
    }
}

/// Raw account record as returned by one extension's `accounts.get()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectedAccount {
    pub address: String,
    #[serde(default)]
    pub genesis_hash: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub key_type: Option<String>,
}

impl InjectedAccount {
    /// Tag the record with the extension it came from.
    pub fn with_source(self, source: &str) -> InjectedAccountWithMeta {
        InjectedAccountWithMeta {
            address: self.address,
            meta: AccountMeta {
                genesis_hash: self.genesis_hash,
                name: self.name,
                source: source.to_string(),
            },
            key_type: self.key_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    #[serde(default)]
    pub genesis_hash: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub source: String,
}

/// Account record aggregated across all enabled extensions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InjectedAccountWithMeta {
    pub address: String,
    pub meta: AccountMeta,
    #[serde(default, rename = "type")]
    pub key_type: Option<String>,
}

/// An extension that answered the enable request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtensionInfo {
    pub name: String,
    pub version: String,
}

pub fn truncate_address(address: &str) -> String {
    let len = address.chars().count();
    if len > 12 {
        let head: String = address.chars().take(6).collect();
        let tail: String = address.chars().skip(len - 4).collect();
        format!("{}...{}", head, tail)
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, name: Option<&str>, source: &str) -> InjectedAccountWithMeta {
        InjectedAccountWithMeta {
            address: address.to_string(),
            meta: AccountMeta {
                genesis_hash: None,
                name: name.map(str::to_string),
                source: source.to_string(),
            },
            key_type: Some("sr25519".to_string()),
        }
    }

    #[test]
    fn reshape_keeps_name_and_source() {
        let account = WalletAccount::from(record("5Fabc", Some("Main"), "talisman"));
        assert_eq!(
            account,
            WalletAccount {
                address: "5Fabc".to_string(),
                name: Some("Main".to_string()),
                source: "talisman".to_string(),
            }
        );
    }

    #[test]
    fn empty_or_missing_name_becomes_none() {
        let empty = WalletAccount::from(record("5Fxyz", Some(""), "polkadot-js"));
        assert_eq!(empty.name, None);
        let missing = WalletAccount::from(record("5Fxyz", None, "polkadot-js"));
        assert_eq!(missing.name, None);
    }

    #[test]
    fn absent_name_serializes_as_null() {
        let account = WalletAccount::from(record("5Fxyz", Some(""), "polkadot-js"));
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "address": "5Fxyz", "name": null, "source": "polkadot-js" })
        );
    }

    #[test]
    fn injected_account_decodes_js_shape() {
        let raw = r#"{"address":"5Fabc","genesisHash":"0x91b1","name":"Main","type":"sr25519"}"#;
        let account: InjectedAccount = serde_json::from_str(raw).unwrap();
        assert_eq!(account.genesis_hash.as_deref(), Some("0x91b1"));
        assert_eq!(account.key_type.as_deref(), Some("sr25519"));

        let bare: InjectedAccount = serde_json::from_str(r#"{"address":"5Fxyz"}"#).unwrap();
        assert_eq!(bare.name, None);

        let tagged = account.with_source("talisman");
        assert_eq!(tagged.meta.source, "talisman");
        assert_eq!(tagged.meta.name.as_deref(), Some("Main"));
    }

    #[test]
    fn truncate_long_and_short_addresses() {
        assert_eq!(
            truncate_address("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"),
            "5Grwva...utQY"
        );
        assert_eq!(truncate_address("5Fabc"), "5Fabc");
        assert_eq!(truncate_address("123456789012"), "123456789012");
    }

    #[test]
    fn display_name_falls_back_to_short_address() {
        let account = WalletAccount {
            address: "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY".to_string(),
            name: None,
            source: "subwallet-js".to_string(),
        };
        assert_eq!(account.display_name(), "5Grwva...utQY");
    }
}
