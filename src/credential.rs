// Pairing Credential - Normalized value type
//
// The credential triple (pairing code, setup id, category) plus a stable
// identity and an optional display name. Fields are private: every write
// goes through a normalizing setter, so a malformed stored form is
// unreachable. Normalization never fails; it degrades to a well-formed
// placeholder instead.

use serde::{Deserialize, Serialize};

use crate::category::AccessoryCategory;

/// Masked form of the all-zero pairing code.
///
/// Syntactically valid but semantically "not yet entered": validity gates
/// must refuse to persist or encode a credential still carrying it.
pub const PLACEHOLDER_PAIRING_CODE: &str = "000-00-000";

// ============================================================================
// CREDENTIAL
// ============================================================================

/// A machine-pairing credential.
///
/// Invariants held by construction:
/// - `pairing_code` is always exactly `DDD-DD-DDD` once any value has been
///   assigned (empty or partial input is zero-padded and masked).
/// - `setup_id` is always 0-4 uppercase ASCII alphanumerics, never padded.
///
/// The serialized form is the persisted document entry: `id`, optional
/// `name`, `pairingCode` (masked), `setupID`, `category` (integer code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingCredential {
    /// Stable identity, generated at creation. Merge key for imports.
    id: String,

    /// Free-text display label, no validation.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(rename = "pairingCode")]
    pairing_code: String,

    #[serde(rename = "setupID")]
    setup_id: String,

    category: AccessoryCategory,
}

impl PairingCredential {
    /// Create a credential with a fresh identity and no name.
    /// Both inputs pass through normalization.
    pub fn new(pairing_code: &str, setup_id: &str, category: AccessoryCategory) -> Self {
        PairingCredential {
            id: uuid::Uuid::new_v4().to_string(),
            name: None,
            pairing_code: Self::normalized_pairing_code(pairing_code),
            setup_id: Self::normalized_setup_id(setup_id),
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn pairing_code(&self) -> &str {
        &self.pairing_code
    }

    pub fn setup_id(&self) -> &str {
        &self.setup_id
    }

    pub fn category(&self) -> AccessoryCategory {
        self.category
    }

    /// The digits-only form of the pairing code (8 digits once set).
    pub fn pairing_digits(&self) -> String {
        self.pairing_code
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_category(&mut self, category: AccessoryCategory) {
        self.category = category;
    }

    /// Assign a pairing code from raw input. Strips all non-digits, keeps
    /// the first 8, zero-pads on the right, and masks as `DDD-DD-DDD`.
    /// Never fails.
    pub fn set_pairing_code(&mut self, raw: &str) {
        self.pairing_code = Self::normalized_pairing_code(raw);
    }

    /// Assign a setup id from raw input. Uppercases, strips everything but
    /// ASCII letters and digits, keeps the first 4. Never fails.
    pub fn set_setup_id(&mut self, raw: &str) {
        self.setup_id = Self::normalized_setup_id(raw);
    }

    /// True iff the digits-only pairing code is exactly 8 digits that fit an
    /// unsigned 32-bit integer and the setup id is exactly 4 alphanumerics.
    pub fn is_valid(&self) -> bool {
        let digits = self.pairing_digits();
        let pairing_code_valid = digits.len() == 8 && digits.parse::<u32>().is_ok();
        let setup_id_valid = self.setup_id.len() == 4
            && self.setup_id.chars().all(|c| c.is_ascii_alphanumeric());
        pairing_code_valid && setup_id_valid
    }

    /// True while the pairing code still holds the all-zero placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.pairing_code == PLACEHOLDER_PAIRING_CODE
    }

    // ========================================================================
    // NORMALIZATION HELPERS
    // ========================================================================

    fn normalized_pairing_code(raw: &str) -> String {
        let digits: String = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(8)
            .collect();
        Self::mask_pairing_digits(&digits)
    }

    fn normalized_setup_id(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .take(4)
            .collect()
    }

    /// Right-pad to 8 digits and insert separators: `DDD-DD-DDD`.
    fn mask_pairing_digits(digits: &str) -> String {
        let padded = format!("{:0<8}", digits);
        format!("{}-{}-{}", &padded[..3], &padded[3..5], &padded[5..])
    }
}

// ============================================================================
// TESTS
// ============================================================================
