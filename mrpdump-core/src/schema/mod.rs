//! Front-end agnostic field metadata.
//!
//! This module describes the fields a decoder emits without tying them to
//! any particular renderer. A tree view, a table, or a JSON exporter can all
//! be driven from the same descriptors.
//!
//! # Example
//!
//! ```rust
//! use mrpdump_core::schema::{DataKind, DisplayBase, FieldDescriptor};
//!
//! const HEADER: FieldDescriptor =
//!     FieldDescriptor::new("Vector Header", "mrp.vector_header", DataKind::UInt16)
//!         .with_base(DisplayBase::Hex);
//!
//! assert_eq!(HEADER.base.render(0x2003, 2), "0x2003");
//! ```

mod field;
mod kind;

pub use field::{FieldDescriptor, ValueNames};
pub use kind::{DataKind, DisplayBase};

/// A protocol's complete schema.
pub type ProtocolSchema = Vec<&'static FieldDescriptor>;
