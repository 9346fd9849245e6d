//! Typed MMRP parse tree.
//!
//! Every node records the absolute byte range it was decoded from. The tree
//! borrows variable-length values from the decoded buffer.

use crate::error::ProtocolError;
use crate::protocol::FieldValue;
use crate::schema::FieldDescriptor;

use super::cursor::Span;
use super::fields;
use super::message::{AttributeType, MessageHeader};
use super::packed::PackedEvent;
use super::vector::VectorHeader;

/// A decoded MMRP PDU.
#[derive(Debug, Clone, PartialEq)]
pub struct MmrpFrame<'a> {
    pub protocol_version: u8,
    pub version_span: Span,
    pub messages: Vec<Message<'a>>,
    /// `None` when the PDU ended without one under `implicit_end_mark`.
    pub end_mark: Option<EndMark>,
    /// Bytes after the frame End Mark.
    pub trailer: &'a [u8],
    /// Non-fatal conditions in encounter order.
    pub diagnostics: Vec<ProtocolError>,
    /// Protocol version through the frame End Mark; excludes the trailer.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message<'a> {
    pub header: MessageHeader,
    pub vector_attributes: Vec<VectorAttribute<'a>>,
    pub end_mark: Option<EndMark>,
    /// First Vector Header through the list End Mark.
    pub attribute_list_span: Span,
    /// AttributeType through the list End Mark.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorAttribute<'a> {
    pub header: VectorHeader,
    pub header_span: Span,
    pub first_value: FirstValue<'a>,
    pub first_value_span: Span,
    pub events: Vec<PackedEvent>,
    pub span: Span,
}

/// The FirstValue of a Vector Attribute, interpreted by attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstValue<'a> {
    Mac([u8; 6]),
    ServiceRequirement(u8),
    /// Unknown attribute type, or a length that does not fit the type.
    Raw(&'a [u8]),
}

impl<'a> FirstValue<'a> {
    pub fn interpret(attribute_type: AttributeType, bytes: &'a [u8]) -> Self {
        match (attribute_type, bytes) {
            (AttributeType::Mac, _) => match <[u8; 6]>::try_from(bytes) {
                Ok(mac) => FirstValue::Mac(mac),
                Err(_) => FirstValue::Raw(bytes),
            },
            (AttributeType::ServiceRequirement, [value]) => FirstValue::ServiceRequirement(*value),
            _ => FirstValue::Raw(bytes),
        }
    }

    pub fn field(&self) -> &'static FieldDescriptor {
        match self {
            FirstValue::Mac(_) => &fields::MAC,
            FirstValue::ServiceRequirement(_) => &fields::SERVICE_REQUIREMENT,
            FirstValue::Raw(_) => &fields::RAW_VALUE,
        }
    }

    pub fn to_field_value(&self) -> FieldValue<'a> {
        match *self {
            FirstValue::Mac(mac) => FieldValue::MacAddr(mac),
            FirstValue::ServiceRequirement(v) => FieldValue::UInt8(v),
            FirstValue::Raw(bytes) => FieldValue::Bytes(bytes),
        }
    }
}

/// A 0x0000 terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndMark {
    pub span: Span,
}

/// One (field, byte range, value) triple of the flattened tree.
///
/// Bitfield items carry the whole containing word, as read from the wire;
/// [`TreeItem::field_bits`] applies the field's bitmask.
#[derive(Debug, Clone)]
pub struct TreeItem<'a> {
    pub field: &'static FieldDescriptor,
    pub span: Span,
    pub value: FieldValue<'a>,
    /// Nesting level, 0 for the protocol root.
    pub depth: usize,
}

impl<'a> TreeItem<'a> {
    fn new(field: &'static FieldDescriptor, span: Span, value: FieldValue<'a>, depth: usize) -> Self {
        Self {
            field,
            span,
            value,
            depth,
        }
    }

    fn group(field: &'static FieldDescriptor, span: Span, depth: usize) -> Self {
        Self::new(field, span, FieldValue::Null, depth)
    }

    /// Integer value with the field's bitmask applied; `None` for
    /// non-integer values.
    pub fn field_bits(&self) -> Option<u32> {
        let raw = u32::try_from(self.value.as_u64()?).ok()?;
        Some(self.field.masked(raw))
    }
}

impl<'a> MmrpFrame<'a> {
    pub fn vector_attribute_count(&self) -> usize {
        self.messages.iter().map(|m| m.vector_attributes.len()).sum()
    }

    pub fn event_count(&self) -> usize {
        self.vector_attributes().map(|v| v.events.len()).sum()
    }

    /// Every vector attribute in wire order.
    pub fn vector_attributes(&self) -> impl Iterator<Item = &VectorAttribute<'a>> {
        self.messages.iter().flat_map(|m| m.vector_attributes.iter())
    }

    pub fn trailer_span(&self) -> Span {
        Span::new(self.span.end, self.span.end + self.trailer.len())
    }

    /// Flatten the tree in wire order.
    pub fn items(&self) -> Vec<TreeItem<'a>> {
        let mut items = Vec::with_capacity(2 + self.messages.len() * 6);
        items.push(TreeItem::group(&fields::PROTOCOL, self.span, 0));
        items.push(TreeItem::new(
            &fields::PROTOCOL_VERSION,
            self.version_span,
            FieldValue::UInt8(self.protocol_version),
            1,
        ));

        for message in &self.messages {
            message.push_items(&mut items, 1);
        }

        if let Some(end_mark) = self.end_mark {
            items.push(end_mark.item(1));
        }
        if !self.trailer.is_empty() {
            items.push(TreeItem::new(
                &fields::TRAILER,
                self.trailer_span(),
                FieldValue::Bytes(self.trailer),
                1,
            ));
        }
        items
    }
}

impl<'a> Message<'a> {
    fn push_items(&self, items: &mut Vec<TreeItem<'a>>, depth: usize) {
        let header = &self.header;
        items.push(TreeItem::group(&fields::MESSAGE, self.span, depth));
        items.push(TreeItem::new(
            &fields::ATTRIBUTE_TYPE,
            header.type_span,
            FieldValue::UInt8(header.attribute_type.raw()),
            depth + 1,
        ));
        items.push(TreeItem::new(
            &fields::ATTRIBUTE_LENGTH,
            header.length_span,
            FieldValue::UInt8(header.attribute_length),
            depth + 1,
        ));
        items.push(TreeItem::group(
            &fields::ATTRIBUTE_LIST,
            self.attribute_list_span,
            depth + 1,
        ));
        for vector in &self.vector_attributes {
            vector.push_items(items, depth + 2);
        }
        if let Some(end_mark) = self.end_mark {
            items.push(end_mark.item(depth + 1));
        }
    }
}

impl<'a> VectorAttribute<'a> {
    fn push_items(&self, items: &mut Vec<TreeItem<'a>>, depth: usize) {
        items.push(TreeItem::group(&fields::VECTOR_ATTRIBUTE, self.span, depth));
        items.push(TreeItem::new(
            &fields::VECTOR_HEADER,
            self.header_span,
            FieldValue::UInt16(self.header.raw),
            depth + 1,
        ));
        items.push(TreeItem::new(
            &fields::LEAVE_ALL_EVENT,
            self.header_span,
            FieldValue::UInt16(self.header.raw),
            depth + 2,
        ));
        items.push(TreeItem::new(
            &fields::NUMBER_OF_VALUES,
            self.header_span,
            FieldValue::UInt16(self.header.raw),
            depth + 2,
        ));
        items.push(TreeItem::group(
            &fields::FIRST_VALUE,
            self.first_value_span,
            depth + 1,
        ));
        items.push(TreeItem::new(
            self.first_value.field(),
            self.first_value_span,
            self.first_value.to_field_value(),
            depth + 2,
        ));
        for packed in &self.events {
            items.push(TreeItem::new(
                &fields::THREE_PACKED_EVENT,
                packed.span,
                FieldValue::UInt8(packed.event.raw()),
                depth + 1,
            ));
        }
    }
}

impl EndMark {
    fn item<'a>(&self, depth: usize) -> TreeItem<'a> {
        TreeItem::new(&fields::END_MARK, self.span, FieldValue::UInt16(0), depth)
    }
}
