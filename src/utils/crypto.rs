use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};

use crate::error::Result;

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// SHA-256 over the bytes of `text`, returned as 64 lowercase hex characters
pub fn sha256_hex(text: &str) -> String {
    HEXLOWER.encode(&sha256_digest(text.as_bytes()))
}

pub fn hex_encode(data: &[u8]) -> String {
    HEXLOWER.encode(data)
}

pub fn hex_decode(data: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(data)?)
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(data).into_vec()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_base58_leading_zero_bytes() {
        // Each leading zero byte maps to a single '1'
        assert_eq!(base58_encode(&[0, 0, 1]), "112");
        assert_eq!(base58_decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_base58_decode_rejects_invalid_alphabet() {
        // '0', 'O', 'I' and 'l' are not part of the alphabet
        let result = base58_decode("0OIl");
        assert!(matches!(result, Err(AddressError::DecodeError(_))));
    }

    #[test]
    fn test_hex_decode_rejects_non_hex() {
        assert!(hex_decode("0g").is_err());
        assert_eq!(hex_decode("0aFF").unwrap(), vec![0x0a, 0xff]);
        assert_eq!(hex_encode(&[0x0a, 0xff]), "0aff");
    }
}
