//! CheckMacValue signing and verification

use crate::canonical::canonical_string;
use crate::hash::{hash_string, mac_equal};
use funpoint_core::{ParameterSet, SecretPair, CHECK_MAC_VALUE};

/// Compute the checksum token for a parameter set
///
/// Any `CheckMacValue` entry already present - stale or correct - is
/// excluded from the computation, so signing is insensitive to whether
/// the set has been signed before.
///
/// Pure function of `(params, secrets)`; no secret material appears in
/// the output beyond what the hash binds.
///
/// # Example
///
/// ```rust
/// use funpoint_core::{ParameterSet, SecretPair};
/// use funpoint_mac::sign;
///
/// let secrets = SecretPair::new("K", "I").unwrap();
/// let params: ParameterSet = [("a", "1")].into_iter().collect();
///
/// let mac = sign(&params, &secrets);
/// assert_eq!(mac.len(), 64);
/// assert_eq!(mac, mac.to_uppercase());
/// ```
pub fn sign(params: &ParameterSet, secrets: &SecretPair) -> String {
    hash_string(&canonical_string(params, secrets))
}

/// Verify the checksum token carried inside a parameter set
///
/// The received token is read from the reserved `CheckMacValue` key
/// (absent means empty string, never an error), the expected token is
/// recomputed over the remaining entries, and the two are compared
/// case-insensitively in constant time.
///
/// A failed verification is a normal outcome, not an error - the caller
/// branches on the returned `bool` and answers the gateway accordingly.
///
/// # Example
///
/// ```rust
/// use funpoint_core::{ParameterSet, SecretPair, CHECK_MAC_VALUE};
/// use funpoint_mac::{sign, verify};
///
/// let secrets = SecretPair::new("K", "I").unwrap();
/// let mut params: ParameterSet = [("a", "1")].into_iter().collect();
/// params.insert(CHECK_MAC_VALUE, sign(&params, &secrets));
///
/// assert!(verify(&params, &secrets));
/// ```
pub fn verify(params: &ParameterSet, secrets: &SecretPair) -> bool {
    let received = params.get(CHECK_MAC_VALUE).unwrap_or("");
    let expected = sign(params, secrets);
    mac_equal(received, &expected)
}

/// Return a copy of the parameter set with a fresh token attached
///
/// Convenience for the outbound path: compute the token and store it
/// under the reserved key, replacing any previous one.
pub fn signed(params: &ParameterSet, secrets: &SecretPair) -> ParameterSet {
    let mut out = params.clone();
    out.insert(CHECK_MAC_VALUE, sign(params, secrets));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets() -> SecretPair {
        SecretPair::new("265fIDjIvesceXWM", "pOOvhGd1V2pJbjfX").unwrap()
    }

    fn sample_params() -> ParameterSet {
        [
            ("MerchantID", "1000031"),
            ("MerchantTradeNo", "T1"),
            ("TotalAmount", "100"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_sign_round_trips_through_verify() {
        let mut params = sample_params();
        params.insert(CHECK_MAC_VALUE, sign(&params, &secrets()));
        assert!(verify(&params, &secrets()));
    }

    #[test]
    fn test_signed_attaches_token() {
        let params = signed(&sample_params(), &secrets());
        assert!(params.contains_key(CHECK_MAC_VALUE));
        assert!(verify(&params, &secrets()));
    }

    #[test]
    fn test_missing_token_fails_verification() {
        assert!(!verify(&sample_params(), &secrets()));
    }

    #[test]
    fn test_empty_set_is_deterministic() {
        let empty = ParameterSet::new();
        assert_eq!(sign(&empty, &secrets()), sign(&empty, &secrets()));
        assert!(!verify(&empty, &secrets()));
    }

    #[test]
    fn test_set_holding_only_the_reserved_key() {
        let mut params = ParameterSet::new();
        params.insert(CHECK_MAC_VALUE, "ABC");

        // Signs like the empty set, and the bogus token does not verify.
        assert_eq!(sign(&params, &secrets()), sign(&ParameterSet::new(), &secrets()));
        assert!(!verify(&params, &secrets()));
    }
}
