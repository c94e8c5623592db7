use thiserror::Error;

/// Message carried by [`WalletError::NoExtension`].
pub const NO_EXTENSION_MESSAGE: &str =
    "No wallet extension found. Please install Polkadot.js, Talisman, or SubWallet.";

#[derive(Error, Debug)]
pub enum CoreError {
    #[cfg(feature = "native")]
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[cfg(feature = "native")]
    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialization(String),
}

#[cfg(feature = "native")]
impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::TomlSerialization(err.to_string())
    }
}

/// Failure of a connector operation.
///
/// `Upstream` carries the provider's error value untouched so callers can
/// re-raise exactly what the extension API produced.
#[derive(Error, Debug)]
pub enum WalletError<E> {
    #[error("{}", NO_EXTENSION_MESSAGE)]
    NoExtension,

    #[error("{0}")]
    Upstream(E),
}

impl<E> WalletError<E> {
    pub fn is_no_extension(&self) -> bool {
        matches!(self, WalletError::NoExtension)
    }

    /// The provider error, if this failure came from upstream.
    pub fn into_upstream(self) -> Option<E> {
        match self {
            WalletError::Upstream(e) => Some(e),
            WalletError::NoExtension => None,
        }
    }
}

/// Errors raised by [`crate::registry::Web3Registry`].
///
/// Failures inside individual extensions are logged and skipped, so they
/// never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("You must pass a name for your app to the web3Enable function")]
    MissingOrigin,

    #[error("{0}: web3Enable(originName) needs to be called before {0}")]
    NotEnabled(&'static str),

    #[error("web3FromAddress: Unable to find injected {0}")]
    AccountNotFound(String),

    #[error("web3FromSource: Unable to find an injected {0}")]
    SourceNotFound(String),
}
