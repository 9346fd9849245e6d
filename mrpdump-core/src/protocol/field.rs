//! Field value types for protocol decoding.
//!
//! FieldValue references PDU data directly where it can (Bytes) and owns
//! data only when a value has to be constructed (OwnedString, List).

use compact_str::CompactString;

use crate::format::{format_hex, format_mac};

/// Possible field value types.
///
/// The lifetime parameter `'data` ties the value to the PDU buffer.
#[derive(Debug, Clone)]
pub enum FieldValue<'data> {
    // === Primitives ===
    /// Unsigned 8-bit integer
    UInt8(u8),
    /// Unsigned 16-bit integer
    UInt16(u16),
    /// Unsigned 32-bit integer
    UInt32(u32),
    /// Boolean value
    Bool(bool),

    /// MAC address (6 bytes)
    MacAddr([u8; 6]),

    // === Zero-copy references ===
    /// Static label, such as a value-table entry.
    Str(&'static str),
    /// Byte run borrowed from the PDU.
    Bytes(&'data [u8]),

    // === Constructed/owned values ===
    /// Owned string for constructed values (joined names, formatted values).
    OwnedString(CompactString),

    /// List of values for repeated fields. All elements share one type.
    List(Vec<FieldValue<'data>>),

    /// Null/missing value
    Null,
}

impl<'data> FieldValue<'data> {
    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt8(v) => Some(*v as u64),
            FieldValue::UInt16(v) => Some(*v as u64),
            FieldValue::UInt32(v) => Some(*v as u64),
            _ => None,
        }
    }

    /// Try to get as str reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            FieldValue::OwnedString(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get as bytes reference.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            FieldValue::MacAddr(mac) => Some(mac.as_slice()),
            _ => None,
        }
    }

    /// Try to get as list reference.
    pub fn as_list(&self) -> Option<&[FieldValue<'data>]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl<'data> std::fmt::Display for FieldValue<'data> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::UInt8(v) => write!(f, "{v}"),
            FieldValue::UInt16(v) => write!(f, "{v}"),
            FieldValue::UInt32(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::OwnedString(s) => write!(f, "{s}"),
            FieldValue::Bytes(b) => write!(f, "{}", format_hex(b)),
            FieldValue::MacAddr(mac) => match format_mac(mac) {
                Some(s) => write!(f, "{s}"),
                None => write!(f, "{}", format_hex(mac)),
            },
            FieldValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            FieldValue::Null => write!(f, "NULL"),
        }
    }
}

// Borrowed and owned strings compare equal when their text matches.
impl<'a, 'b> PartialEq<FieldValue<'b>> for FieldValue<'a> {
    fn eq(&self, other: &FieldValue<'b>) -> bool {
        match (self, other) {
            (FieldValue::UInt8(a), FieldValue::UInt8(b)) => a == b,
            (FieldValue::UInt16(a), FieldValue::UInt16(b)) => a == b,
            (FieldValue::UInt32(a), FieldValue::UInt32(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::MacAddr(a), FieldValue::MacAddr(b)) => a == b,
            (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
            (FieldValue::Str(a), FieldValue::OwnedString(b)) => *a == b.as_str(),
            (FieldValue::OwnedString(a), FieldValue::Str(b)) => a.as_str() == *b,
            (FieldValue::OwnedString(a), FieldValue::OwnedString(b)) => a == b,
            (FieldValue::Bytes(a), FieldValue::Bytes(b)) => a == b,
            (FieldValue::List(a), FieldValue::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            (FieldValue::Null, FieldValue::Null) => true,
            _ => false,
        }
    }
}
