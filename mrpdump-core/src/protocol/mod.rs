//! Protocol decoding framework.
//!
//! This module provides:
//! - [`Protocol`] trait for implementing decoders
//! - [`ProtocolRegistry`] for routing payloads to decoders by EtherType
//! - The built-in MRP application decoders
//!
//! ## Supported Protocols
//!
//! | EtherType | Protocol |
//! |-----------|----------|
//! | 0x88F6 | MMRP (Multiple MAC Registration Protocol) |
//!
//! ## Example
//!
//! ```rust
//! use mrpdump_core::protocol::{default_registry, ethertype, parse_payload};
//!
//! let registry = default_registry();
//! // Version 0, one MAC message with one LeaveAll vector carrying no events.
//! let pdu: &[u8] = &[
//!     0x00,                                     // protocol version
//!     0x02, 0x06,                               // attribute type MAC, length 6
//!     0x20, 0x00,                               // vector header: LeaveAll, 0 values
//!     0x01, 0x80, 0xc2, 0x00, 0x00, 0x20,       // first value
//!     0x00, 0x00,                               // attribute list end mark
//!     0x00, 0x00,                               // message end mark
//! ];
//!
//! let (name, result) = parse_payload(&registry, ethertype::MMRP, pdu).unwrap();
//! assert_eq!(name, "mmrp");
//! assert!(result.is_ok());
//! assert_eq!(result.get("vector_attribute_count").and_then(|v| v.as_u64()), Some(1));
//!
//! // Nothing claims IPv4.
//! assert!(parse_payload(&registry, 0x0800, pdu).is_err());
//! ```

mod context;
mod field;
mod registry;

pub mod mmrp;

// Test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

use crate::error::{Error, Result};
use mmrp::DecodeConfig;

pub use context::{FieldEntry, ParseContext, ParseResult};
pub use field::FieldValue;
pub use mmrp::MmrpProtocol;
pub use registry::{BuiltinProtocol, Protocol, ProtocolRegistry};

/// EtherType values reserved for MRP applications (IEEE 802.1Q).
pub mod ethertype {
    /// Multiple MAC Registration Protocol.
    pub const MMRP: u16 = 0x88F6;
    /// Multiple VLAN Registration Protocol.
    pub const MVRP: u16 = 0x88F5;
    /// Multiple Stream Registration Protocol.
    pub const MSRP: u16 = 0x22EA;
}

/// Create a registry with all built-in protocol decoders.
pub fn default_registry() -> ProtocolRegistry {
    registry_with_config(DecodeConfig::default())
}

/// Create a registry whose MRP decoders use `config`.
pub fn registry_with_config(config: DecodeConfig) -> ProtocolRegistry {
    let mut registry = ProtocolRegistry::new();
    registry.register(MmrpProtocol::new(config));
    registry
}

/// Decode a payload already demultiplexed on `ethertype`.
///
/// Fails with [`Error::UnsupportedEtherType`] when no registered decoder
/// claims the EtherType. A malformed PDU is not an `Err`; it is reported
/// through [`ParseResult::error`].
pub fn parse_payload<'a>(
    registry: &ProtocolRegistry,
    ethertype: u16,
    data: &'a [u8],
) -> Result<(&'static str, ParseResult<'a>)> {
    parse_payload_with_context(registry, &ParseContext::new(ethertype), data)
}

/// Decode a payload with an explicit context (EtherType, packet offset).
///
/// With a non-zero `context.offset`, `data` is the whole captured packet and
/// the PDU starts `offset` bytes in.
pub fn parse_payload_with_context<'a>(
    registry: &ProtocolRegistry,
    context: &ParseContext,
    data: &'a [u8],
) -> Result<(&'static str, ParseResult<'a>)> {
    let parser = registry
        .find_parser(context)
        .ok_or(Error::UnsupportedEtherType {
            ethertype: context.ethertype.unwrap_or_default(),
        })?;
    tracing::trace!(
        protocol = parser.name(),
        len = data.len(),
        offset = context.offset,
        "dispatching payload"
    );
    Ok((parser.name(), parser.parse(data, context)))
}
