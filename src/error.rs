// Error types
//
// One enum for the whole library boundary. Decode mismatches are not errors:
// scanned payload text is arbitrary third-party input, so the codec reports
// per-field absence instead (see payload::decode).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The credential does not satisfy `is_valid()` and cannot be encoded.
    #[error("credential is not valid for encoding")]
    InvalidCredential,

    /// The store holds no credential with this id.
    #[error("no credential with id {0}")]
    NotFound(String),

    /// Reading or writing the credential document failed. On save this is
    /// recoverable: the in-memory collection has already been updated and
    /// remains authoritative.
    #[error("credential database I/O failed: {0}")]
    Persistence(#[from] std::io::Error),

    /// The credential document did not parse as a credential collection.
    #[error("credential document is invalid: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
