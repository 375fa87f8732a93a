use std::fmt;

/// The error type for cipher operations.
///
/// Every malformed-input condition is detected before any bit manipulation
/// starts, so a failed call never leaves partial output behind and never
/// corrupts state used by later calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied key is empty. The engine normalizes shorter keys by
    /// zero-padding and truncates longer ones to 64 bits, but an empty key
    /// is rejected outright.
    InvalidKeyMaterial,

    /// Ciphertext length is not a multiple of the 8-byte block size.
    MalformedCiphertextLength {
        /// Actual length in bytes
        length: usize,
    },

    /// A bit vector does not have the width the receiving stage requires
    /// (whole bytes for the decoder, 48 bits for the substitution stage).
    MalformedBitLength {
        /// Actual length in bits
        length: usize,
    },

    /// A permutation table entry addresses a position outside the input bit
    /// vector. The built-in tables never trip this; it guards against
    /// corrupted or misconfigured tables.
    IndexOutOfRange {
        /// The offending 1-based table entry
        position: usize,
        /// Width of the input bit vector
        width: usize,
    },

    /// Input to the hex decoder is not valid hexadecimal.
    InvalidHexEncoding,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyMaterial => {
                write!(f, "key material must not be empty")
            }
            CipherError::MalformedCiphertextLength { length } => {
                write!(
                    f,
                    "ciphertext length {} is not a multiple of the 8-byte block size",
                    length
                )
            }
            CipherError::MalformedBitLength { length } => {
                write!(f, "bit vector has malformed length {}", length)
            }
            CipherError::IndexOutOfRange { position, width } => {
                write!(
                    f,
                    "permutation table entry {} exceeds input width {}",
                    position, width
                )
            }
            CipherError::InvalidHexEncoding => {
                write!(f, "input is not valid hexadecimal")
            }
        }
    }
}

impl std::error::Error for CipherError {}

impl From<CipherError> for std::io::Error {
    fn from(err: CipherError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
