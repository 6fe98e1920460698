//! Error handling for address conversion
//!
//! Every failure in the conversion pipeline is a local validation error.
//! Nothing here is transient, so callers decide whether to retry with
//! corrected input.

use std::fmt;

/// Result type alias for address operations
pub type Result<T> = std::result::Result<T, AddressError>;

/// Error types for address conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input length precondition violated
    InvalidLength { expected: usize, actual: usize },
    /// Missing or wrong required prefix
    InvalidPrefix(String),
    /// Hex or Base58 text could not be decoded
    DecodeError(String),
    /// Decoded bytes do not have the payload + checksum shape
    InvalidDecodedAddress(String),
    /// Payload cannot be reduced to 40 hex characters
    InvalidMatch(String),
    /// Embedded checksum does not match the payload
    InvalidChecksum { expected: String, actual: String },
    /// Payload length after stripping is not exactly 40
    FailedToGetAddress(String),
    /// A known vector did not convert to its expected counterpart
    VectorMismatch {
        input: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidLength { expected, actual } => {
                write!(
                    f,
                    "Invalid address length: expected {expected}, got {actual}"
                )
            }
            AddressError::InvalidPrefix(msg) => write!(f, "Invalid address prefix: {msg}"),
            AddressError::DecodeError(msg) => write!(f, "Decode error: {msg}"),
            AddressError::InvalidDecodedAddress(msg) => {
                write!(f, "Invalid decoded address: {msg}")
            }
            AddressError::InvalidMatch(msg) => write!(f, "Invalid match: {msg}"),
            AddressError::InvalidChecksum { expected, actual } => {
                write!(f, "Invalid checksum: expected {expected}, got {actual}")
            }
            AddressError::FailedToGetAddress(msg) => {
                write!(f, "Failed to get hex address: {msg}")
            }
            AddressError::VectorMismatch {
                input,
                expected,
                actual,
            } => write!(
                f,
                "Vector mismatch for {input}: expected {expected}, got {actual}"
            ),
        }
    }
}

impl std::error::Error for AddressError {}

impl From<hex::FromHexError> for AddressError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            // The reported char is a single byte widened to char, which garbles non-ASCII input
            hex::FromHexError::InvalidHexCharacter { c, index } => AddressError::DecodeError(
                format!("Invalid hex character {:#04x} at position {index}", c as u32),
            ),
            other => AddressError::DecodeError(other.to_string()),
        }
    }
}

impl From<bs58::decode::Error> for AddressError {
    fn from(err: bs58::decode::Error) -> Self {
        AddressError::DecodeError(format!("Invalid base58 encoding: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AddressError::InvalidLength {
            expected: 42,
            actual: 41,
        };
        assert_eq!(
            err.to_string(),
            "Invalid address length: expected 42, got 41"
        );

        let err = AddressError::InvalidChecksum {
            expected: "6a225447".to_string(),
            actual: "6a225448".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid checksum: expected 6a225447, got 6a225448"
        );
    }

    #[test]
    fn test_from_hex_error() {
        let err: AddressError = hex::decode("0z").unwrap_err().into();
        assert_eq!(
            err,
            AddressError::DecodeError("Invalid hex character 0x7a at position 1".to_string())
        );

        let err: AddressError = hex::decode("abc").unwrap_err().into();
        assert!(matches!(err, AddressError::DecodeError(_)));
    }
}
