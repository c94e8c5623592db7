// dotwallet Core Library
// Platform-agnostic wallet-extension connector logic

pub mod models;
pub mod error;
pub mod settings;
pub mod wallet_provider;
pub mod connector;
pub mod registry;
pub mod session;
pub mod headless;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

// Re-exports
pub use error::{CoreError, RegistryError, WalletError};
pub use models::*;
pub use settings::ConnectorSettings;
pub use wallet_provider::*;
pub use connector::*;
pub use registry::*;
pub use session::*;
pub use headless::*;
