//! Field descriptor for protocol schemas.

use super::{DataKind, DisplayBase};

/// Value-to-string table used to label enumerated field values.
pub type ValueNames = &'static [(u32, &'static str)];

/// Static registration metadata for one decoded field.
///
/// Decoders only emit (descriptor, byte range, value) triples; everything a
/// front-end needs to render the value lives here.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Display label (e.g., "Attribute Type")
    pub label: &'static str,

    /// Filter path (e.g., "mrp-mmrp.attribute_type")
    pub name: &'static str,

    /// Data type
    pub kind: DataKind,

    /// Numeric display base
    pub base: DisplayBase,

    /// Optional value-to-string table
    pub value_names: Option<ValueNames>,

    /// Bitmask applied to the containing word, 0 for the whole value
    pub bitmask: u32,

    /// Optional description for documentation
    pub description: Option<&'static str>,
}

impl FieldDescriptor {
    /// Create a new field with no bitmask or value table.
    pub const fn new(label: &'static str, name: &'static str, kind: DataKind) -> Self {
        Self {
            label,
            name,
            kind,
            base: DisplayBase::None,
            value_names: None,
            bitmask: 0,
            description: None,
        }
    }

    /// Create a grouping field with no value of its own.
    pub const fn group(label: &'static str, name: &'static str) -> Self {
        Self::new(label, name, DataKind::None)
    }

    /// Builder: set display base.
    pub const fn with_base(mut self, base: DisplayBase) -> Self {
        self.base = base;
        self
    }

    /// Builder: attach a value-to-string table.
    pub const fn with_value_names(mut self, names: ValueNames) -> Self {
        self.value_names = Some(names);
        self
    }

    /// Builder: set bitmask.
    pub const fn with_bitmask(mut self, mask: u32) -> Self {
        self.bitmask = mask;
        self
    }

    /// Add a description to the field.
    pub const fn with_description(mut self, desc: &'static str) -> Self {
        self.description = Some(desc);
        self
    }

    /// Look up the label for a raw value, if the field has a table entry for it.
    pub fn value_name(&self, raw: u32) -> Option<&'static str> {
        self.value_names?
            .iter()
            .find(|(value, _)| *value == raw)
            .map(|(_, name)| *name)
    }

    /// Apply the bitmask to a containing word and shift the result down.
    pub fn masked(&self, word: u32) -> u32 {
        if self.bitmask == 0 {
            return word;
        }
        (word & self.bitmask) >> self.bitmask.trailing_zeros()
    }

    /// Whether the field groups child fields instead of carrying a value.
    pub fn is_group(&self) -> bool {
        self.kind == DataKind::None
    }
}
