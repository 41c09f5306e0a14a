// Credential Store - Whole-document persistence
//
// Owns the ordered credential collection and mirrors it to a single JSON
// document after every mutation. The document is a plain serialized list;
// there is no append log, so writers must be serialized. The exclusive
// `&mut self` borrow is that boundary; callers sharing a store across
// threads wrap it in a `Mutex`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::credential::PairingCredential;
use crate::error::{Error, Result};

/// File name of the persisted document inside the storage directory.
pub const DATABASE_FILE_NAME: &str = "database.json";

pub struct CredentialStore {
    path: PathBuf,
    credentials: Vec<PairingCredential>,
}

impl CredentialStore {
    /// Directory holding the persisted document.
    pub fn storage_dir() -> PathBuf {
        let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("pairing-codes")
    }

    /// Well-known location of the persisted document.
    pub fn default_path() -> PathBuf {
        Self::storage_dir().join(DATABASE_FILE_NAME)
    }

    /// Open a store backed by the document at `path`, loading it once.
    ///
    /// A missing or corrupt document is non-fatal: the store starts empty
    /// and the next successful save rewrites the document.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let credentials = Self::load(&path);
        CredentialStore { path, credentials }
    }

    /// Open the store at [`CredentialStore::default_path`].
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    fn load(path: &Path) -> Vec<PairingCredential> {
        fs::read(path)
            .ok()
            .and_then(|data| serde_json::from_slice(&data).ok())
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The collection, in insertion order.
    pub fn credentials(&self) -> &[PairingCredential] {
        &self.credentials
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PairingCredential> {
        self.credentials.iter().find(|c| c.id() == id)
    }

    /// Append a credential. No uniqueness check beyond the generated id:
    /// visually identical entries under different ids are allowed.
    ///
    /// The in-memory collection is updated even when the save fails; the
    /// returned error is recoverable via [`CredentialStore::save`].
    pub fn add(&mut self, credential: PairingCredential) -> Result<()> {
        self.credentials.push(credential);
        self.save()
    }

    /// Replace the entry whose id matches `credential`.
    ///
    /// Fails with [`Error::NotFound`] (and leaves the collection untouched)
    /// when no entry has that id.
    pub fn update(&mut self, credential: PairingCredential) -> Result<()> {
        let index = self
            .credentials
            .iter()
            .position(|c| c.id() == credential.id())
            .ok_or_else(|| Error::NotFound(credential.id().to_string()))?;

        self.credentials[index] = credential;
        self.save()
    }

    /// Delete every entry with this id (normally at most one). A missing id
    /// is a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.credentials.retain(|c| c.id() != id);
        self.save()
    }

    /// Discard the current collection and persist `credentials` verbatim.
    pub fn replace_all(&mut self, credentials: Vec<PairingCredential>) -> Result<()> {
        self.credentials = credentials;
        self.save()
    }

    /// Serialize the whole collection to the document path.
    ///
    /// Failures surface as [`Error::Persistence`]; the in-memory collection
    /// stays authoritative and a later call can retry the write.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_vec(&self.credentials)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::AccessoryCategory;

    fn sample(code: &str, setup_id: &str) -> PairingCredential {
        PairingCredential::new(code, setup_id, AccessoryCategory::Other)
    }

    #[test]
    fn test_open_missing_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path().join(DATABASE_FILE_NAME));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_corrupt_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE_NAME);
        fs::write(&path, b"{ this is not a credential list").unwrap();

        let store = CredentialStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE_NAME);

        let credential = sample("12345678", "ABCD");
        let id = credential.id().to_string();

        let mut store = CredentialStore::open(&path);
        store.add(credential).unwrap();

        let reopened = CredentialStore::open(&path);
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get(&id).unwrap().pairing_code(), "123-45-678");
    }

    #[test]
    fn test_add_allows_visually_identical_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::open(dir.path().join(DATABASE_FILE_NAME));

        store.add(sample("12345678", "ABCD")).unwrap();
        store.add(sample("12345678", "ABCD")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_replaces_matching_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE_NAME);
        let mut store = CredentialStore::open(&path);

        let credential = sample("12345678", "ABCD");
        let id = credential.id().to_string();
        store.add(credential).unwrap();

        let mut edited = store.get(&id).unwrap().clone();
        edited.set_name(Some("Living Room".to_string()));
        store.update(edited).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().name(), Some("Living Room"));

        let reopened = CredentialStore::open(&path);
        assert_eq!(reopened.get(&id).unwrap().name(), Some("Living Room"));
    }

    #[test]
    fn test_update_absent_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::open(dir.path().join(DATABASE_FILE_NAME));

        let stray = sample("12345678", "ABCD");
        let result = store.update(stray.clone());
        assert!(matches!(result, Err(Error::NotFound(id)) if id == stray.id()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_deletes_matching_and_ignores_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::open(dir.path().join(DATABASE_FILE_NAME));

        let credential = sample("12345678", "ABCD");
        let id = credential.id().to_string();
        store.add(credential).unwrap();
        store.add(sample("87654321", "WXYZ")).unwrap();

        store.remove(&id).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());

        // Absent id is a no-op
        store.remove("no-such-id").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_all_takes_list_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE_NAME);
        let mut store = CredentialStore::open(&path);
        store.add(sample("11111111", "AAAA")).unwrap();

        let replacement = vec![sample("22222222", "BBBB"), sample("33333333", "CCCC")];
        store.replace_all(replacement.clone()).unwrap();

        assert_eq!(store.credentials(), replacement.as_slice());

        let reopened = CredentialStore::open(&path);
        assert_eq!(reopened.credentials(), replacement.as_slice());
    }

    #[test]
    fn test_save_creates_storage_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(DATABASE_FILE_NAME);

        let mut store = CredentialStore::open(&path);
        store.add(sample("12345678", "ABCD")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_default_path_shape() {
        let path = CredentialStore::default_path();
        assert!(path.ends_with(Path::new("pairing-codes").join(DATABASE_FILE_NAME)));
    }
}
