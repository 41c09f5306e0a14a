// Setup Payload - Binary packing + base-36 text codec
//
// A valid credential packs into a single u64, fields by increasing bit
// position:
//
//   bits 0-2    version        fixed 0
//   bit  3      reserved       fixed 0
//   bits 4-10   category code  1-44
//   bits 11-12  transport flags
//   bits 13+    pairing pin    0-99,999,999
//
// The portable text form is "X-HM://" + base-36(u64) + setup id. Decoding
// is best-effort per field: scanned input is arbitrary third-party text,
// so a mismatch yields absent fields, never an error.

use serde::{Deserialize, Serialize};

use crate::category::AccessoryCategory;
use crate::credential::PairingCredential;
use crate::error::Error;

/// Literal prefix of every payload string.
pub const PAYLOAD_PREFIX: &str = "X-HM://";

const VERSION: u64 = 0;
const RESERVED: u64 = 0;

/// Transport flags: 1 = IP, 2 = BLE, 4 = wired. Always encoded as BLE.
const FLAG_BLE: u64 = 2;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ============================================================================
// ENCODE
// ============================================================================

/// Encode a credential as its portable payload string.
///
/// Fails with [`Error::InvalidCredential`] unless the credential satisfies
/// `is_valid()`. Deterministic: the same credential always produces the
/// same string.
pub fn encode(credential: &PairingCredential) -> Result<String, Error> {
    if !credential.is_valid() {
        return Err(Error::InvalidCredential);
    }

    let pin: u32 = credential
        .pairing_digits()
        .parse()
        .map_err(|_| Error::InvalidCredential)?;

    let mut payload = VERSION;
    payload |= RESERVED << 3;
    payload |= u64::from(credential.category().code()) << 4;
    payload |= FLAG_BLE << 11;
    payload |= u64::from(pin) << 13;

    Ok(format!(
        "{}{}{}",
        PAYLOAD_PREFIX,
        base36_encode(payload),
        credential.setup_id()
    ))
}

// ============================================================================
// DECODE
// ============================================================================

/// Per-field results of decoding a candidate payload string.
///
/// Fields decode independently so a caller can apply whichever ones
/// succeeded (a payload with an out-of-set category still yields its
/// pairing code and setup id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedCredential {
    /// Trailing 4 characters of the payload, verbatim. `None` when fewer
    /// than 4 characters follow the prefix.
    pub setup_id: Option<String>,

    /// Masked `DDD-DD-DDD` pairing code recovered from the packed integer.
    pub pairing_code: Option<String>,

    /// Category looked up from the packed code. `None` for codes outside
    /// the closed set.
    pub category: Option<AccessoryCategory>,
}

/// Decode a candidate payload string.
///
/// Returns `None` when the input does not start with [`PAYLOAD_PREFIX`] --
/// the string is simply not a payload. Otherwise each field is recovered
/// independently; see [`ScannedCredential`].
///
/// The setup id is taken as the fixed 4-character suffix, so payloads
/// produced from credentials with shorter setup ids do not round-trip.
pub fn decode(text: &str) -> Option<ScannedCredential> {
    let payload = text.strip_prefix(PAYLOAD_PREFIX)?;
    let chars: Vec<char> = payload.chars().collect();

    let (setup_id, encoded) = if chars.len() >= 4 {
        let split = chars.len() - 4;
        (
            Some(chars[split..].iter().collect::<String>()),
            chars[..split].iter().collect::<String>(),
        )
    } else {
        (None, String::new())
    };

    let mut pairing_code = None;
    let mut category = None;

    if let Ok(value) = u64::from_str_radix(&encoded, 36) {
        let pin = (value >> 13) & 0xFFFF_FFFF;
        pairing_code = Some(mask_decoded_pin(pin));
        category = AccessoryCategory::from_code(((value >> 4) & 0x7F) as u8);
    }

    Some(ScannedCredential {
        setup_id,
        pairing_code,
        category,
    })
}

// ============================================================================
// HELPERS
// ============================================================================

/// Render in base 36, uppercase, no leading-zero padding, at least one digit.
fn base36_encode(mut value: u64) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(BASE36_ALPHABET[(value % 36) as usize] as char);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Zero-pad a decoded pin to 8 digits and mask as `DDD-DD-DDD`.
/// Pins wider than 8 digits keep the first three, next two, and last three.
fn mask_decoded_pin(pin: u64) -> String {
    let padded = format!("{:08}", pin);
    format!(
        "{}-{}-{}",
        &padded[..3],
        &padded[3..5],
        &padded[padded.len() - 3..]
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(
        pairing_code: &str,
        setup_id: &str,
        category: AccessoryCategory,
    ) -> PairingCredential {
        PairingCredential::new(pairing_code, setup_id, category)
    }

    #[test]
    fn test_encode_fixed_vector() {
        // 1 | 0<<3 | 1<<4 | 2<<11 | 12345678<<13 = 101135798289 = 1AGLN5E9
        let c = credential("12345678", "ABCD", AccessoryCategory::Other);
        assert_eq!(encode(&c).unwrap(), "X-HM://1AGLN5E9ABCD");
    }

    #[test]
    fn test_encode_rejects_invalid_credential() {
        let c = credential("12345678", "ABC", AccessoryCategory::Other);
        assert!(matches!(encode(&c), Err(Error::InvalidCredential)));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let c = credential("87654321", "WXYZ", AccessoryCategory::Lightbulb);
        assert_eq!(encode(&c).unwrap(), encode(&c).unwrap());
    }

    #[test]
    fn test_round_trip_recovers_all_fields() {
        let cases = [
            ("12345678", "ABCD", AccessoryCategory::Other),
            ("00000001", "0000", AccessoryCategory::Lightbulb),
            ("99999999", "ZZZZ", AccessoryCategory::VideoStreamingBox),
            ("10203040", "A1B2", AccessoryCategory::DoorLock),
        ];

        for (code, setup_id, category) in cases {
            let c = credential(code, setup_id, category);
            let scanned = decode(&encode(&c).unwrap()).unwrap();
            assert_eq!(scanned.pairing_code.as_deref(), Some(c.pairing_code()));
            assert_eq!(scanned.setup_id.as_deref(), Some(setup_id));
            assert_eq!(scanned.category, Some(category));
        }
    }

    #[test]
    fn test_decode_rejects_wrong_prefix() {
        assert_eq!(decode("not-prefixed"), None);
        assert_eq!(decode("x-hm://1AGLN5E9ABCD"), None, "prefix is case-sensitive");
        assert_eq!(decode(""), None);
    }

    #[test]
    fn test_decode_garbage_payload_keeps_setup_id() {
        let scanned = decode("X-HM://not-a-real-payloadABCD").unwrap();
        assert_eq!(scanned.setup_id.as_deref(), Some("ABCD"));
        assert_eq!(scanned.pairing_code, None);
        assert_eq!(scanned.category, None);
    }

    #[test]
    fn test_decode_short_remainder() {
        // Fewer than 4 characters after the prefix: no setup id, and no
        // base-36 payload remains either.
        let scanned = decode("X-HM://AB").unwrap();
        assert_eq!(scanned.setup_id, None);
        assert_eq!(scanned.pairing_code, None);
        assert_eq!(scanned.category, None);
    }

    #[test]
    fn test_decode_unknown_category_is_partial_success() {
        // Category code 100 is in range for the 7-bit field but outside the
        // closed set.
        let value: u64 = (100 << 4) | (2 << 11) | (12345678 << 13);
        let text = format!("{}{}{}", PAYLOAD_PREFIX, base36_encode(value), "ABCD");

        let scanned = decode(&text).unwrap();
        assert_eq!(scanned.pairing_code.as_deref(), Some("123-45-678"));
        assert_eq!(scanned.setup_id.as_deref(), Some("ABCD"));
        assert_eq!(scanned.category, None);
    }

    #[test]
    fn test_decode_accepts_lowercase_base36() {
        let scanned = decode("X-HM://1agln5e9ABCD").unwrap();
        assert_eq!(scanned.pairing_code.as_deref(), Some("123-45-678"));
        assert_eq!(scanned.category, Some(AccessoryCategory::Other));
    }

    #[test]
    fn test_decode_never_panics_on_multibyte_input() {
        // Non-ASCII scanned text must fall through cleanly
        let scanned = decode("X-HM://héllo wörld™").unwrap();
        assert_eq!(scanned.setup_id.as_deref(), Some("rld™"));
        assert_eq!(scanned.pairing_code, None);
    }

    #[test]
    fn test_base36_encode() {
        assert_eq!(base36_encode(0), "0");
        assert_eq!(base36_encode(35), "Z");
        assert_eq!(base36_encode(36), "10");
        assert_eq!(base36_encode(101_135_798_289), "1AGLN5E9");
    }

    #[test]
    fn test_mask_decoded_pin_pads_to_eight() {
        assert_eq!(mask_decoded_pin(1), "000-00-001");
        assert_eq!(mask_decoded_pin(12_345_678), "123-45-678");
        // Oversized pins (adversarial payloads) keep first 3 / next 2 / last 3
        assert_eq!(mask_decoded_pin(4_294_967_295), "429-49-295");
    }
}
