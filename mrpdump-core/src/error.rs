//! Error types for mrpdump-core.
//!
//! This module provides structured error types for all mrpdump-core operations:
//!
//! - [`enum@Error`] - Main error enum that wraps all error types
//! - [`ProtocolError`] - Errors and diagnostics raised while decoding a PDU
//!
//! All errors implement `std::error::Error` and can be converted to `anyhow::Error`.

use thiserror::Error;

/// Main error type for mrpdump-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error during protocol decoding
    #[error("Protocol decode error: {0}")]
    Protocol(#[from] ProtocolError),

    /// No registered decoder claims the EtherType
    #[error("No decoder registered for EtherType {ethertype:#06x}")]
    UnsupportedEtherType { ethertype: u16 },
}

/// Errors related to MRP PDU decoding.
///
/// Not every variant aborts a decode. See [`ProtocolError::is_fatal`]: the
/// informational variants are collected as diagnostics on the decoded frame
/// instead of being returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A read would run past the end of the buffer.
    #[error("truncated at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A three-packed event byte is outside 0..=215.
    #[error("packed event byte {value:#04x} at offset {offset} exceeds 215")]
    MalformedPackedByte { offset: usize, value: u8 },

    /// Attribute type not defined for MMRP. Decoding continues.
    #[error("unknown attribute type {value} at offset {offset}")]
    UnknownAttributeType { offset: usize, value: u8 },

    /// AttributeLength does not match the attribute type's first value size.
    #[error(
        "attribute length {actual} at offset {offset} does not match attribute type {attribute_type} (expected {expected})"
    )]
    AttributeLengthMismatch {
        offset: usize,
        attribute_type: u8,
        expected: u8,
        actual: u8,
    },

    /// More messages than the configured limit.
    #[error("message limit of {limit} exceeded")]
    TooManyMessages { limit: usize },
}

impl ProtocolError {
    /// Whether this condition aborts a decode under the given strictness.
    ///
    /// `strict` is the relevant [`DecodeConfig`](crate::protocol::mmrp::DecodeConfig)
    /// switch for the variant; it is ignored for variants whose severity is fixed.
    pub fn is_fatal(&self, strict: bool) -> bool {
        match self {
            ProtocolError::Truncated { .. } | ProtocolError::TooManyMessages { .. } => true,
            ProtocolError::MalformedPackedByte { .. }
            | ProtocolError::AttributeLengthMismatch { .. } => strict,
            ProtocolError::UnknownAttributeType { .. } => false,
        }
    }

    /// Byte offset the condition was detected at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ProtocolError::Truncated { offset, .. }
            | ProtocolError::MalformedPackedByte { offset, .. }
            | ProtocolError::UnknownAttributeType { offset, .. }
            | ProtocolError::AttributeLengthMismatch { offset, .. } => Some(*offset),
            ProtocolError::TooManyMessages { .. } => None,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
