//! Canonical string serialization

use funpoint_core::{ParameterSet, SecretPair, CHECK_MAC_VALUE};

/// Escape sequences restored to literal characters after the strict
/// percent-encode + lower-case pass.
///
/// The remote verifier runs a legacy URL encoder that leaves these seven
/// characters unescaped; reproducing its output byte-for-byte is an
/// interoperability contract, so the table is applied verbatim as plain
/// string replacements. The patterns do not overlap, so order is
/// irrelevant. `%3d` (`=`) and `%26` (`&`) stay encoded.
const LEGACY_UNESCAPES: [(&str, &str); 7] = [
    ("%2d", "-"),
    ("%5f", "_"),
    ("%2e", "."),
    ("%21", "!"),
    ("%2a", "*"),
    ("%28", "("),
    ("%29", ")"),
];

/// Serialize a parameter set to its canonical hash input
///
/// # Rules
///
/// - The reserved `CheckMacValue` entry is excluded (exact key match)
/// - Keys sorted case-insensitively; keys equal ignoring case fall back
///   to byte order, a stable tie-break for input the protocol leaves
///   undefined
/// - Entries joined as `key=value` with `&`, original-case keys, raw values
/// - Framed as `HashKey=<key>&...&HashIV=<iv>`
/// - Percent-encoded with the strict safe-empty rule (space is `%20`,
///   never `+`), lower-cased, then the legacy escape table is restored
///
/// An empty parameter set is valid and yields `HashKey=<key>&&HashIV=<iv>`
/// before encoding.
///
/// # Example
///
/// ```rust
/// use funpoint_core::{ParameterSet, SecretPair};
/// use funpoint_mac::canonical_string;
///
/// let secrets = SecretPair::new("K", "I").unwrap();
/// let params: ParameterSet = [("b", "2"), ("A", "1")].into_iter().collect();
///
/// let canonical = canonical_string(&params, &secrets);
/// assert_eq!(canonical, "hashkey%3dk%26a%3d1%26b%3d2%26hashiv%3di");
/// ```
pub fn canonical_string(params: &ParameterSet, secrets: &SecretPair) -> String {
    let mut entries: Vec<(&str, &str)> = params
        .iter()
        .filter(|(key, _)| *key != CHECK_MAC_VALUE)
        .collect();

    // Decorate-sort-undecorate: order by the lower-cased key, emit the
    // original-case key.
    entries.sort_by(|(a, _), (b, _)| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    let joined = entries
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let raw = format!(
        "HashKey={}&{}&HashIV={}",
        secrets.hash_key(),
        joined,
        secrets.hash_iv()
    );

    let encoded = urlencoding::encode(&raw).to_lowercase();
    restore_legacy_escapes(&encoded)
}

/// Apply the legacy escape restoration table
fn restore_legacy_escapes(encoded: &str) -> String {
    let mut output = encoded.to_string();
    for (pattern, literal) in LEGACY_UNESCAPES {
        output = output.replace(pattern, literal);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets() -> SecretPair {
        SecretPair::new("K", "I").unwrap()
    }

    #[test]
    fn test_key_value_framing() {
        let params: ParameterSet = [("a", "1")].into_iter().collect();
        let canonical = canonical_string(&params, &secrets());
        assert_eq!(canonical, "hashkey%3dk%26a%3d1%26hashiv%3di");
    }

    #[test]
    fn test_empty_set_keeps_double_separator() {
        let canonical = canonical_string(&ParameterSet::new(), &secrets());
        assert_eq!(canonical, "hashkey%3dk%26%26hashiv%3di");
    }

    #[test]
    fn test_reserved_key_excluded() {
        let with_mac: ParameterSet = [("a", "1"), (CHECK_MAC_VALUE, "STALE")]
            .into_iter()
            .collect();
        let without_mac: ParameterSet = [("a", "1")].into_iter().collect();

        assert_eq!(
            canonical_string(&with_mac, &secrets()),
            canonical_string(&without_mac, &secrets())
        );
    }

    #[test]
    fn test_case_insensitive_sort_keeps_original_case() {
        // "Zb" sorts after "aA" when compared lower-cased, even though
        // 'Z' < 'a' byte-wise.
        let params: ParameterSet = [("Zb", "2"), ("aA", "1")].into_iter().collect();
        let canonical = canonical_string(&params, &secrets());
        assert_eq!(canonical, "hashkey%3dk%26aa%3d1%26zb%3d2%26hashiv%3di");
    }

    #[test]
    fn test_case_tied_keys_break_by_byte_order() {
        // Undefined input class; the tie-break just has to be stable.
        let params: ParameterSet = [("AB", "1"), ("ab", "2")].into_iter().collect();
        let canonical = canonical_string(&params, &secrets());
        assert_eq!(canonical, "hashkey%3dk%26ab%3d1%26ab%3d2%26hashiv%3di");
    }

    #[test]
    fn test_space_encodes_as_percent_20() {
        let params: ParameterSet = [("ItemName", "Test Item")].into_iter().collect();
        let canonical = canonical_string(&params, &secrets());
        assert!(canonical.contains("test%20item"));
        assert!(!canonical.contains('+'));
    }

    #[test]
    fn test_utf8_values_encode_per_byte() {
        let params: ParameterSet = [("ItemName", "測試")].into_iter().collect();
        let canonical = canonical_string(&params, &secrets());
        assert_eq!(
            canonical,
            "hashkey%3dk%26itemname%3d%e6%b8%ac%e8%a9%a6%26hashiv%3di"
        );
    }

    #[test]
    fn test_legacy_escape_table_restored() {
        let params: ParameterSet = [("A-B_C.D!E*F(G)H", "1")].into_iter().collect();
        let canonical = canonical_string(&params, &secrets());
        assert_eq!(canonical, "hashkey%3dk%26a-b_c.d!e*f(g)h%3d1%26hashiv%3di");
    }

    #[test]
    fn test_literal_percent_in_value_survives() {
        // A value containing the text "%2d" must not be confused with the
        // escape sequence: its '%' is itself encoded first.
        let params: ParameterSet = [("a", "%2d")].into_iter().collect();
        let canonical = canonical_string(&params, &secrets());
        assert_eq!(canonical, "hashkey%3dk%26a%3d%252d%26hashiv%3di");
    }
}
