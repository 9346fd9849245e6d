//! # mrpdump-core
//!
//! Decoder for IEEE 802.1Q MRP application PDUs, starting with MMRP
//! (Multiple MAC Registration Protocol).
//!
//! This crate holds everything needed to turn an already-demultiplexed
//! Ethernet payload into a typed record tree. It performs no I/O; the
//! `mrpdump` binary is one front-end on top of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use mrpdump_core::prelude::*;
//!
//! let pdu: &[u8] = &[
//!     0x00,                               // protocol version
//!     0x01, 0x01,                         // Service Requirement, length 1
//!     0x20, 0x01,                         // LeaveAll, one value
//!     0x01,                               // All Unregistered Groups
//!     0x24,                               // JoinIn
//!     0x00, 0x00,                         // attribute list end mark
//!     0x00, 0x00,                         // end mark
//! ];
//!
//! let frame = FrameDecoder::new(DecodeConfig::default()).decode(pdu, 0).unwrap();
//! assert_eq!(frame.messages.len(), 1);
//! assert_eq!(frame.event_count(), 1);
//!
//! for item in frame.items() {
//!     println!("{:indent$}{}: {}", "", item.field.label, item.value, indent = item.depth * 2);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        mrpdump-core                                 |
//! +---------------------------------------------------------------------+
//! |  schema/          - FieldDescriptor, DataKind, DisplayBase          |
//! |  protocol/        - Protocol trait, registry, FieldValue            |
//! |  protocol/mmrp/   - Cursor, FrameDecoder, parse tree, field table   |
//! |  format           - MAC and hex formatting                          |
//! |  error            - Error types                                     |
//! +---------------------------------------------------------------------+
//! ```

pub mod error;
pub mod format;
pub mod prelude;
pub mod protocol;
pub mod schema;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, ProtocolError, Result};
pub use format::{format_hex, format_mac};
pub use protocol::mmrp::{DecodeConfig, FrameDecoder, MmrpFrame, TreeItem};
pub use protocol::{
    default_registry, parse_payload, parse_payload_with_context, registry_with_config,
    BuiltinProtocol, FieldValue, ParseContext, ParseResult, Protocol, ProtocolRegistry,
};
pub use schema::{DataKind, DisplayBase, FieldDescriptor, ProtocolSchema};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
