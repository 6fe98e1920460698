use crate::core::codec::Codec;
use crate::error::{AddressError, Result};
use log::info;

/// Known (hex-address, chain-address) pairs. Hex-addresses may carry mixed
/// case; decoding always yields the lowercase form.
pub const KNOWN_VECTORS: &[(&str, &str)] = &[
    (
        "0x32Be343B94f860124dC4fEe278FDCBD38C102D88",
        "V5dJeCa7bmkqmZF53TqjRbnB4fG6hxuu4f",
    ),
    (
        "0x000000000000000000000000000000000000000f",
        "V111111111111111111111111112jSS6vy",
    ),
    (
        "0xf000000000000000000000000000000000000000",
        "VNt1B3HD3MghPihCxhwMxNKRerBPPbiwvZ",
    ),
    (
        "0x0000000000000000000000000000000000000001",
        "V111111111111111111111111111CdXjnE",
    ),
    (
        "0x1000000000000000000000000000000000000000",
        "V2Tbp525fpnBRiSt4iPxXkxMyf5ZX7bGAJ",
    ),
    (
        "0x0000000000000000000000000000000000000000",
        "V1111111111111111111111111113iMDfC",
    ),
    (
        "0xffffffffffffffffffffffffffffffffffffffff",
        "VQLbz7JHiBTspS962RLKV8GndWFwdcRndD",
    ),
];

/// Run both directions over [`KNOWN_VECTORS`] and return how many pairs
/// were verified. Stops at the first disagreement.
pub fn self_test(codec: &Codec) -> Result<usize> {
    for (index, (hex, chain)) in KNOWN_VECTORS.iter().enumerate() {
        let encoded = codec.encode(hex)?;
        if encoded != *chain {
            return Err(AddressError::VectorMismatch {
                input: hex.to_string(),
                expected: chain.to_string(),
                actual: encoded,
            });
        }

        let decoded = codec.decode(chain)?;
        let expected = hex.to_lowercase();
        if decoded != expected {
            return Err(AddressError::VectorMismatch {
                input: chain.to_string(),
                expected,
                actual: decoded,
            });
        }
        info!("Vector {index}: {hex} <-> {chain}");
    }
    Ok(KNOWN_VECTORS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::PrefixPolicy;

    #[test]
    fn test_self_test_passes() {
        assert_eq!(self_test(&Codec::default()).unwrap(), KNOWN_VECTORS.len());
        assert_eq!(
            self_test(&Codec::new(PrefixPolicy::Strict)).unwrap(),
            KNOWN_VECTORS.len()
        );
    }
}
