//! Core address conversion
//!
//! This module contains the checksum engine, the two-way codec between
//! hex-addresses and chain-addresses, typed address values and the known
//! conversion vectors.

pub mod address;
pub mod checksum;
pub mod codec;
pub mod vectors;

pub use address::{ChainAddress, HexAddress, ADDRESS_BYTES};
pub use checksum::{checksum, CHECKSUM_HEX_LEN};
pub use codec::{
    convert, decode, encode, is_chain_address, is_hex_address, AddressKind, Codec, Conversion,
    Direction, PrefixPolicy, CHAIN_ADDRESS_LEN, CHAIN_BODY_LEN, HEX_ADDRESS_LEN, HEX_PREFIX,
    NETWORK_PREFIX, PAYLOAD_HEX_LEN,
};
pub use vectors::{self_test, KNOWN_VECTORS};
