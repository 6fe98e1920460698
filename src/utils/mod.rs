//! Utility functions and helpers
//!
//! Hashing and text encodings shared by the checksum engine and the codec.

pub mod crypto;

pub use crypto::{
    base58_decode, base58_encode, hex_decode, hex_encode, sha256_digest, sha256_hex,
};
