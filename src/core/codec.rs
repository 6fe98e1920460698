use crate::core::checksum::{checksum, CHECKSUM_HEX_LEN};
use crate::error::{AddressError, Result};
use crate::utils::{base58_decode, base58_encode, hex_decode, hex_encode};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// Prefix carried by every hex-address
pub const HEX_PREFIX: &str = "0x";
/// Network prefix carried by every chain-address
pub const NETWORK_PREFIX: char = 'V';
/// Hex characters in a canonical 20-byte payload
pub const PAYLOAD_HEX_LEN: usize = 40;
/// Total length of a hex-address, prefix included
pub const HEX_ADDRESS_LEN: usize = HEX_PREFIX.len() + PAYLOAD_HEX_LEN;
/// Base58 body width of a chain-address, prefix excluded
pub const CHAIN_BODY_LEN: usize = 33;
/// Total length of a chain-address, prefix included
pub const CHAIN_ADDRESS_LEN: usize = CHAIN_BODY_LEN + 1;

const BASE58_ZERO: char = '1';

/// Whether decoding requires the leading network prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixPolicy {
    /// A missing prefix is tolerated and logged
    #[default]
    Lenient,
    /// A missing prefix is an `InvalidPrefix` error
    Strict,
}

/// Direction of a conversion performed by [`Codec::convert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    HexToChain,
    ChainToHex,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::HexToChain => write!(f, "hex -> chain"),
            Direction::ChainToHex => write!(f, "chain -> hex"),
        }
    }
}

/// Which of the two address forms a string holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressKind {
    HexAddress,
    ChainAddress,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::HexAddress => write!(f, "hex-address"),
            AddressKind::ChainAddress => write!(f, "chain-address"),
        }
    }
}

/// Outcome of an auto-detected conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub direction: Direction,
}

/// Converts between hex-addresses and chain-addresses.
///
/// Holds no state beyond its prefix policy, so a single value can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    prefix_policy: PrefixPolicy,
}

impl Codec {
    pub fn new(prefix_policy: PrefixPolicy) -> Codec {
        Codec { prefix_policy }
    }

    pub fn prefix_policy(&self) -> PrefixPolicy {
        self.prefix_policy
    }

    /// Encode a `0x`-prefixed hex-address into a `V`-prefixed chain-address.
    pub fn encode(&self, address: &str) -> Result<String> {
        let payload = strip_hex_address(address)?.to_ascii_lowercase();

        let checksum = checksum(&payload);
        let raw = hex_decode(&format!("{payload}{checksum}"))?;

        let encoded = base58_encode(&raw);
        // Leading zero bytes collapse to a single symbol each; restore the fixed width
        let padding = BASE58_ZERO
            .to_string()
            .repeat(CHAIN_BODY_LEN.saturating_sub(encoded.len()));
        debug!("Encoded payload {payload} with checksum {checksum}");

        Ok(format!("{NETWORK_PREFIX}{padding}{encoded}"))
    }

    /// Decode a chain-address back into its lowercase `0x` hex-address.
    pub fn decode(&self, address: &str) -> Result<String> {
        let body = match address.strip_prefix(NETWORK_PREFIX) {
            Some(body) => body,
            None => match self.prefix_policy {
                PrefixPolicy::Strict => {
                    return Err(AddressError::InvalidPrefix(format!(
                        "chain address must start with {NETWORK_PREFIX}"
                    )))
                }
                PrefixPolicy::Lenient => {
                    warn!("Chain address {address} has no {NETWORK_PREFIX} prefix, decoding as-is");
                    address
                }
            },
        };

        let decoded = hex_encode(&base58_decode(body)?);

        if decoded.len() <= CHECKSUM_HEX_LEN {
            return Err(AddressError::InvalidDecodedAddress(format!(
                "decoded {} hex characters, need a payload and {CHECKSUM_HEX_LEN} checksum characters",
                decoded.len()
            )));
        }
        if !decoded
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(AddressError::InvalidDecodedAddress(decoded));
        }

        let (payload, checksum_part) = decoded.split_at(decoded.len() - CHECKSUM_HEX_LEN);

        let mut payload = payload;
        while payload.len() > PAYLOAD_HEX_LEN {
            payload = payload.strip_prefix('0').ok_or_else(|| {
                AddressError::InvalidMatch(format!(
                    "payload of {} hex characters does not start with a zero",
                    payload.len()
                ))
            })?;
        }

        let expected = checksum(payload);
        if expected != checksum_part {
            return Err(AddressError::InvalidChecksum {
                expected,
                actual: checksum_part.to_string(),
            });
        }

        if payload.len() != PAYLOAD_HEX_LEN {
            return Err(AddressError::FailedToGetAddress(format!(
                "payload has {} hex characters, expected {PAYLOAD_HEX_LEN}",
                payload.len()
            )));
        }
        debug!("Decoded {address} with checksum {checksum_part}");

        Ok(format!("{HEX_PREFIX}{payload}"))
    }

    /// Convert in whichever direction the input's prefix implies.
    ///
    /// Inputs starting with `0x` are encoded, everything else is decoded.
    pub fn convert(&self, address: &str) -> Result<Conversion> {
        let (output, direction) = if address.starts_with(HEX_PREFIX) {
            (self.encode(address)?, Direction::HexToChain)
        } else {
            (self.decode(address)?, Direction::ChainToHex)
        };
        Ok(Conversion {
            input: address.to_string(),
            output,
            direction,
        })
    }

    /// Tell which form `address` is in, or why it is neither.
    ///
    /// Anything starting with `0x` is judged as a hex-address; everything
    /// else reports the decode error under this codec's prefix policy.
    pub fn classify(&self, address: &str) -> Result<AddressKind> {
        match self.convert(address)?.direction {
            Direction::HexToChain => Ok(AddressKind::HexAddress),
            Direction::ChainToHex => Ok(AddressKind::ChainAddress),
        }
    }

    pub fn is_hex_address(&self, address: &str) -> bool {
        self.encode(address).is_ok()
    }

    pub fn is_chain_address(&self, address: &str) -> bool {
        self.decode(address).is_ok()
    }
}

/// Check the length and `0x` prefix of a hex-address and return the
/// 40-character payload, case untouched.
pub(crate) fn strip_hex_address(address: &str) -> Result<&str> {
    if address.len() != HEX_ADDRESS_LEN {
        return Err(AddressError::InvalidLength {
            expected: HEX_ADDRESS_LEN,
            actual: address.len(),
        });
    }
    address.strip_prefix(HEX_PREFIX).ok_or_else(|| {
        AddressError::InvalidPrefix(format!("hex address must start with {HEX_PREFIX}"))
    })
}

/// Encode with the default (lenient) codec
pub fn encode(address: &str) -> Result<String> {
    Codec::default().encode(address)
}

/// Decode with the default (lenient) codec
pub fn decode(address: &str) -> Result<String> {
    Codec::default().decode(address)
}

pub fn convert(address: &str) -> Result<Conversion> {
    Codec::default().convert(address)
}

pub fn is_hex_address(address: &str) -> bool {
    Codec::default().is_hex_address(address)
}

pub fn is_chain_address(address: &str) -> bool {
    Codec::default().is_chain_address(address)
}
