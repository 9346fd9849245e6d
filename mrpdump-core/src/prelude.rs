//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust
//! use mrpdump_core::prelude::*;
//!
//! let registry = default_registry();
//! assert!(registry.get_parser("mmrp").is_some());
//! ```

// Schema types
pub use crate::schema::{DataKind, DisplayBase, FieldDescriptor, ProtocolSchema};

// Protocol types
pub use crate::protocol::{
    default_registry, ethertype, parse_payload, registry_with_config, BuiltinProtocol, FieldValue,
    ParseContext, ParseResult, Protocol, ProtocolRegistry,
};

// MMRP decoder
pub use crate::protocol::mmrp::{
    AttributeEvent, AttributeType, DecodeConfig, FirstValue, FrameDecoder, LeaveAllEvent,
    MmrpFrame, MmrpProtocol, Span, TreeItem,
};

// Error types
pub use crate::error::{Error, ProtocolError, Result};
