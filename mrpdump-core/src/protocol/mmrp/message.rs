//! Message header decoding (AttributeType, AttributeLength).

use crate::error::ProtocolError;

use super::cursor::{Cursor, Span};
use super::fields::attribute_type;

/// MMRP attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    ServiceRequirement,
    Mac,
    Unknown(u8),
}

impl AttributeType {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            attribute_type::SERVICE_REQUIREMENT => AttributeType::ServiceRequirement,
            attribute_type::MAC => AttributeType::Mac,
            other => AttributeType::Unknown(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match self {
            AttributeType::ServiceRequirement => attribute_type::SERVICE_REQUIREMENT,
            AttributeType::Mac => attribute_type::MAC,
            AttributeType::Unknown(v) => *v,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::ServiceRequirement => "Service Requirement",
            AttributeType::Mac => "MAC",
            AttributeType::Unknown(_) => "Unknown",
        }
    }

    /// FirstValue length IEEE 802.1Q defines for this type.
    pub fn expected_length(&self) -> Option<u8> {
        match self {
            AttributeType::ServiceRequirement => Some(1),
            AttributeType::Mac => Some(6),
            AttributeType::Unknown(_) => None,
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

/// The two fixed fields at the start of every Message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub attribute_type: AttributeType,
    pub attribute_length: u8,
    pub type_span: Span,
    pub length_span: Span,
}

/// Read AttributeType and AttributeLength, two bytes, at the cursor.
pub fn read_message_header(cursor: &mut Cursor<'_>) -> Result<MessageHeader, ProtocolError> {
    let start = cursor.position();
    // Both bytes or neither.
    let raw = cursor.read_u16()?;
    let [type_byte, length_byte] = raw.to_be_bytes();

    Ok(MessageHeader {
        attribute_type: AttributeType::from_raw(type_byte),
        attribute_length: length_byte,
        type_span: Span::new(start, start + 1),
        length_span: Span::new(start + 1, start + 2),
    })
}
