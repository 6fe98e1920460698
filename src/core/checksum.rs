use crate::utils::sha256_hex;

/// Number of hex characters kept from the final digest (4 bytes)
pub const CHECKSUM_HEX_LEN: usize = 8;

/// Checksum binding a canonical hex payload to its chain-address form.
///
/// Two SHA-256 rounds chained through their lowercase hex text: the second
/// round hashes the 64 hex characters of the first digest, not its raw
/// bytes. The first 8 hex characters of the second digest are kept.
///
/// The input is hashed as-is, so callers must lowercase the payload first.
pub fn checksum(hex_payload: &str) -> String {
    let first = sha256_hex(hex_payload);
    let mut second = sha256_hex(&first);
    second.truncate(CHECKSUM_HEX_LEN);
    second
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_payloads() {
        assert_eq!(
            checksum("32be343b94f860124dc4fee278fdcbd38c102d88"),
            "6db32c74"
        );
        assert_eq!(
            checksum("0000000000000000000000000000000000000000"),
            "6a225447"
        );
    }

    #[test]
    fn test_checksum_is_total() {
        assert_eq!(checksum(""), "cd372fb8");
        assert_eq!(checksum("not hex at all").len(), CHECKSUM_HEX_LEN);
    }

    #[test]
    fn test_checksum_is_case_sensitive() {
        assert_eq!(
            checksum("32BE343B94F860124DC4FEE278FDCBD38C102D88"),
            "76dfa8f8"
        );
    }
}
