// Pairing Codes - Core Library
// Exposes the credential model, payload codec, store, and import/export
// for use in the CLI and tests

pub mod category;
pub mod credential;
pub mod error;
pub mod import_export;
pub mod payload;
pub mod store;

// Re-export commonly used types
pub use category::{AccessoryCategory, UnknownCategoryCode};
pub use credential::{PairingCredential, PLACEHOLDER_PAIRING_CODE};
pub use error::{Error, Result};
pub use import_export::{
    default_export_filename, export_to_path, import_from_path, MergePolicy,
};
pub use payload::{ScannedCredential, PAYLOAD_PREFIX};
pub use store::CredentialStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
