use crate::core::codec::{strip_hex_address, Codec, HEX_PREFIX};
use crate::error::{AddressError, Result};
use crate::utils::{hex_decode, hex_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bytes in an account identifier
pub const ADDRESS_BYTES: usize = 20;

/// A 160-bit account identifier in its hex-address form.
///
/// Parsing accepts any letter case; display is always the canonical
/// lowercase `0x` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexAddress([u8; ADDRESS_BYTES]);

impl HexAddress {
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> HexAddress {
        HexAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    pub fn to_chain_address(&self) -> Result<ChainAddress> {
        let text = Codec::default().encode(&self.to_string())?;
        Ok(ChainAddress { text, hex: *self })
    }
}

impl FromStr for HexAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex_decode(strip_hex_address(s)?)?;
        let bytes: [u8; ADDRESS_BYTES] = bytes.try_into().map_err(|_| {
            AddressError::DecodeError("hex payload is not 20 bytes".to_string())
        })?;
        Ok(HexAddress(bytes))
    }
}

impl TryFrom<String> for HexAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexAddress> for String {
    fn from(address: HexAddress) -> Self {
        address.to_string()
    }
}

impl fmt::Display for HexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HEX_PREFIX}{}", hex_encode(&self.0))
    }
}

/// A chain-address whose checksum has been verified.
///
/// Always held in canonical form: `V` prefix plus the 33-character body,
/// even when parsed leniently from a string without the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainAddress {
    text: String,
    hex: HexAddress,
}

impl ChainAddress {
    /// Parse with an explicit codec, e.g. one with a strict prefix policy
    pub fn parse_with(codec: &Codec, s: &str) -> Result<ChainAddress> {
        let hex: HexAddress = codec.decode(s)?.parse()?;
        hex.to_chain_address()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn to_hex_address(&self) -> HexAddress {
        self.hex
    }
}

impl FromStr for ChainAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        ChainAddress::parse_with(&Codec::default(), s)
    }
}

impl TryFrom<String> for ChainAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<HexAddress> for ChainAddress {
    type Error = AddressError;

    fn try_from(value: HexAddress) -> Result<Self> {
        value.to_chain_address()
    }
}

impl From<ChainAddress> for HexAddress {
    fn from(address: ChainAddress) -> Self {
        address.hex
    }
}

impl From<ChainAddress> for String {
    fn from(address: ChainAddress) -> Self {
        address.text
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::PrefixPolicy;

    const HEX: &str = "0x32Be343B94f860124dC4fEe278FDCBD38C102D88";
    const CHAIN: &str = "V5dJeCa7bmkqmZF53TqjRbnB4fG6hxuu4f";

    #[test]
    fn test_hex_address_display_is_lowercase() {
        let address: HexAddress = HEX.parse().unwrap();
        assert_eq!(address.to_string(), HEX.to_lowercase());
        assert_eq!(address.as_bytes()[0], 0x32);
    }

    #[test]
    fn test_hex_address_parse_errors() {
        assert!(matches!(
            "0x12".parse::<HexAddress>(),
            Err(AddressError::InvalidLength { .. })
        ));
        assert!(matches!(
            HEX.replacen("0x", "1x", 1).parse::<HexAddress>(),
            Err(AddressError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_hex_address_from_bytes() {
        let zero = HexAddress::from_bytes([0u8; ADDRESS_BYTES]);
        assert_eq!(
            zero.to_string(),
            "0x0000000000000000000000000000000000000000"
        );
        let chain = zero.to_chain_address().unwrap();
        assert_eq!(chain.as_str(), "V1111111111111111111111111113iMDfC");
        assert_eq!(chain.to_hex_address(), zero);
        assert_eq!(zero.to_string().parse::<HexAddress>().unwrap(), zero);
    }

    #[test]
    fn test_typed_conversion_both_ways() {
        let hex: HexAddress = HEX.parse().unwrap();
        let chain = hex.to_chain_address().unwrap();
        assert_eq!(chain.as_str(), CHAIN);
        assert_eq!(HexAddress::from(chain), hex);
    }

    #[test]
    fn test_chain_address_canonicalizes_missing_prefix() {
        let chain: ChainAddress = CHAIN[1..].parse().unwrap();
        assert_eq!(chain.to_string(), CHAIN);

        let strict = Codec::new(PrefixPolicy::Strict);
        assert!(ChainAddress::parse_with(&strict, &CHAIN[1..]).is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let chain: ChainAddress = CHAIN.parse().unwrap();
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(json, format!("\"{CHAIN}\""));

        let hex: HexAddress = serde_json::from_str(&format!("\"{HEX}\"")).unwrap();
        assert_eq!(hex, chain.to_hex_address());

        let bad: std::result::Result<ChainAddress, _> = serde_json::from_str("\"V123\"");
        assert!(bad.is_err());
    }
}
