//! # vlx-address - Hex-Address / Chain-Address Converter
//!
//! Two networks share the same 160-bit account identifier but write it
//! differently. This crate converts between the two forms:
//!
//! - **hex-address**: `0x` followed by 40 hex digits, no checksum
//! - **chain-address**: `V` followed by a 33-character Base58 body holding
//!   the 20-byte payload plus a 4-byte checksum
//!
//! ## How the Code Is Organized
//! - `core/`: checksum engine, codec, typed addresses, known vectors
//! - `utils/`: SHA-256, hex and Base58 helpers
//! - `config/`: process-wide settings (decode prefix policy)
//! - `error/`: the error taxonomy shared by every operation
//! - `cli/`: command-line argument parsing
//!
//! ## Quick Start
//! ```
//! let chain = vlx_address::encode("0x32Be343B94f860124dC4fEe278FDCBD38C102D88").unwrap();
//! assert_eq!(chain, "V5dJeCa7bmkqmZF53TqjRbnB4fG6hxuu4f");
//! assert_eq!(
//!     vlx_address::decode(&chain).unwrap(),
//!     "0x32be343b94f860124dc4fee278fdcbd38c102d88"
//! );
//! ```
//!
//! All conversions are pure functions; the only shared state is the
//! configuration used by the CLI.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG, STRICT_PREFIX_ENV};
pub use crate::core::{
    checksum, convert, decode, encode, is_chain_address, is_hex_address, self_test, AddressKind,
    ChainAddress, Codec, Conversion, Direction, HexAddress, PrefixPolicy, CHAIN_ADDRESS_LEN,
    KNOWN_VECTORS,
};
pub use error::{AddressError, Result};
