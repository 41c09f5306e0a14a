// Import / Export - Batch reconciliation of credential collections
//
// An import reads an external credential document and reconciles it into
// the store under one policy. The document must parse as a whole before
// anything is applied: a failed read or parse leaves the store unchanged.

use std::fs;
use std::path::Path;

use crate::credential::PairingCredential;
use crate::error::Result;
use crate::store::CredentialStore;

/// How an imported collection combines with the existing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Append every imported credential. An id already present in the
    /// store gets a fresh identity carrying over the pairing code, setup
    /// id, category, and name -- the result can hold visually identical
    /// entries under different ids, which is intended.
    Add,

    /// Discard the current collection and take the import verbatim, ids
    /// included.
    Replace,
}

/// Apply the credential document at `path` to the store under `policy`.
///
/// Returns the number of credentials in the imported document. Read and
/// parse failures abort before any mutation.
pub fn import_from_path(
    store: &mut CredentialStore,
    path: &Path,
    policy: MergePolicy,
) -> Result<usize> {
    let data = fs::read(path)?;
    let imported: Vec<PairingCredential> = serde_json::from_slice(&data)?;
    let count = imported.len();

    match policy {
        MergePolicy::Replace => {
            store.replace_all(imported)?;
        }
        MergePolicy::Add => {
            let mut merged = store.credentials().to_vec();
            for item in imported {
                if merged.iter().any(|c| c.id() == item.id()) {
                    let mut fresh = PairingCredential::new(
                        item.pairing_code(),
                        item.setup_id(),
                        item.category(),
                    );
                    fresh.set_name(item.name().map(str::to_string));
                    merged.push(fresh);
                } else {
                    merged.push(item);
                }
            }
            store.replace_all(merged)?;
        }
    }

    Ok(count)
}

/// Copy the persisted document to `dest`, byte for byte.
///
/// Saves first so the document reflects the in-memory collection.
pub fn export_to_path(store: &CredentialStore, dest: &Path) -> Result<()> {
    store.save()?;
    fs::copy(store.path(), dest)?;
    Ok(())
}

/// Date-stamped default filename for exports.
pub fn default_export_filename() -> String {
    format!(
        "Pairing Codes Export {}.json",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

// ============================================================================
// TESTS
// ============================================================================
