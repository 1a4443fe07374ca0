//! # Libreg Value Errors
//!
//! Errors raised while inferring, serializing or decoding stored values.
use thiserror::Error;

use crate::value::types::ValueType;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("Unsupported value type for registry: {0}")]
    UnsupportedType(String),

    #[error("Unknown value type tag '{0}'")]
    UnknownType(String),

    #[error("Integer {value} does not fit type '{ty}'")]
    OutOfRange { value: i128, ty: ValueType },

    #[error("Invalid hex value '{0}': expected an even number of [0-9a-f] digits fitting 64 bits")]
    InvalidHex(String),

    #[error("Cannot store {input} as type '{ty}'")]
    Mismatch { input: String, ty: ValueType },

    #[error("Failed to decode '{text}' as '{ty}': {reason}")]
    Decode {
        text: String,
        ty: ValueType,
        reason: String,
    },
}
