//! MMRP (Multiple MAC Registration Protocol) decoder.
//!
//! An MMRP PDU is a protocol version byte followed by Messages, each a run of
//! Vector Attributes. Both runs end with a 0x0000 End Mark instead of a
//! length prefix:
//!
//! ```text
//! ProtocolVersion(u8)
//! Message* EndMark
//!   Message := AttributeType(u8) AttributeLength(u8) VectorAttribute* EndMark
//!   VectorAttribute := VectorHeader(u16) FirstValue ThreePackedEvents
//! ```
//!
//! [`FrameDecoder`] produces the full [`MmrpFrame`] tree. [`MmrpProtocol`]
//! plugs it into the [`ProtocolRegistry`](crate::protocol::ProtocolRegistry)
//! and summarises the tree as flat fields.

mod config;
mod cursor;
mod decoder;
pub mod fields;
mod message;
mod packed;
mod tree;
mod vector;

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::error::ProtocolError;
use crate::protocol::{ethertype, FieldValue, ParseContext, ParseResult, Protocol};
use crate::schema::ProtocolSchema;

pub use config::DecodeConfig;
pub use cursor::{Cursor, Span};
pub use decoder::{FrameDecoder, END_MARK};
pub use message::{read_message_header, AttributeType, MessageHeader};
pub use packed::{expand_events, packed_len, unpack_three, AttributeEvent, PackedEvent};
pub use tree::{EndMark, FirstValue, Message, MmrpFrame, TreeItem, VectorAttribute};
pub use vector::{read_vector_header, LeaveAllEvent, VectorHeader, MAX_NUMBER_OF_VALUES};

/// Decode a standalone PDU with the default configuration.
pub fn decode(buf: &[u8]) -> Result<MmrpFrame<'_>, ProtocolError> {
    FrameDecoder::default().decode(buf, 0)
}

/// MMRP decoder for the protocol registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct MmrpProtocol {
    config: DecodeConfig,
}

impl MmrpProtocol {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn decoder(&self) -> FrameDecoder {
        FrameDecoder::new(self.config)
    }

    /// Project a decoded frame into summary fields.
    pub fn summarize<'a>(frame: &MmrpFrame<'a>) -> SmallVec<[(&'static str, FieldValue<'a>); 16]> {
        let mut summary = SmallVec::new();

        summary.push(("protocol_version", FieldValue::UInt8(frame.protocol_version)));
        summary.push((
            "message_count",
            FieldValue::UInt32(frame.messages.len() as u32),
        ));
        summary.push((
            "attribute_types",
            FieldValue::List(
                frame
                    .messages
                    .iter()
                    .map(|m| FieldValue::Str(m.header.attribute_type.name()))
                    .collect(),
            ),
        ));
        summary.push((
            "vector_attribute_count",
            FieldValue::UInt32(frame.vector_attribute_count() as u32),
        ));
        summary.push(("event_count", FieldValue::UInt32(frame.event_count() as u32)));
        summary.push((
            "first_values",
            FieldValue::List(
                frame
                    .vector_attributes()
                    .map(|v| match v.first_value {
                        FirstValue::ServiceRequirement(raw) => {
                            match fields::SERVICE_REQUIREMENT.value_name(raw as u32) {
                                Some(name) => FieldValue::Str(name),
                                None => FieldValue::OwnedString(CompactString::from(
                                    raw.to_string(),
                                )),
                            }
                        }
                        other => other.to_field_value(),
                    })
                    .collect(),
            ),
        ));
        summary.push((
            "events",
            FieldValue::List(
                frame
                    .vector_attributes()
                    .flat_map(|v| v.events.iter())
                    .map(|e| FieldValue::Str(e.event.name()))
                    .collect(),
            ),
        ));
        summary.push((
            "leave_all",
            FieldValue::Bool(
                frame
                    .vector_attributes()
                    .any(|v| v.header.leave_all == LeaveAllEvent::LeaveAll),
            ),
        ));

        summary
    }
}

impl Protocol for MmrpProtocol {
    fn name(&self) -> &'static str {
        "mmrp"
    }

    fn display_name(&self) -> &'static str {
        "MRP-MMRP"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        match context.ethertype {
            Some(ethertype::MMRP) => Some(100),
            _ => None,
        }
    }

    fn parse<'a>(&self, data: &'a [u8], context: &ParseContext) -> ParseResult<'a> {
        match self.decoder().decode(data, context.offset) {
            Ok(frame) => {
                let warnings = frame.diagnostics.iter().map(|d| d.to_string()).collect();
                ParseResult::success(Self::summarize(&frame), frame.trailer)
                    .with_warnings(warnings)
            }
            Err(e) => ParseResult::error(
                format!("MMRP: malformed frame: {e}"),
                data.get(context.offset..).unwrap_or_default(),
            ),
        }
    }

    fn schema_fields(&self) -> ProtocolSchema {
        fields::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::test_utils::{
        assert_field_eq, assert_parse_ok, mmrp_context, MessageBuilder, MmrpFrameBuilder,
        VectorAttributeBuilder,
    };

    fn parse(data: &[u8]) -> ParseResult<'_> {
        MmrpProtocol::default().parse(data, &mmrp_context())
    }

    #[test]
    fn test_can_parse() {
        let parser = MmrpProtocol::default();
        assert_eq!(parser.can_parse(&ParseContext::new(0x88F6)), Some(100));
        assert!(parser.can_parse(&ParseContext::new(0x88F5)).is_none());
        assert!(parser.can_parse(&ParseContext::default()).is_none());
    }

    #[test]
    fn test_summary_fields() {
        let data = hex::decode(
            [
                "00",
                "0206",
                "2002",
                "0180c2000020",
                "07", // 0*36 + 1*6 + 1: New, JoinIn
                "0000",
                "0101",
                "0001",
                "00",
                "a0", // 160 = 4*36 + 2*6 + 4: Mt
                "0000",
                "0000",
            ]
            .concat(),
        )
        .unwrap();

        let result = parse(&data);
        assert_parse_ok(&result);
        assert!(result.warnings.is_empty());
        assert!(result.remaining.is_empty());

        assert_eq!(result.get("protocol_version"), Some(&FieldValue::UInt8(0)));
        assert_eq!(result.get("message_count"), Some(&FieldValue::UInt32(2)));
        assert_eq!(
            result.get("vector_attribute_count"),
            Some(&FieldValue::UInt32(2))
        );
        assert_eq!(result.get("event_count"), Some(&FieldValue::UInt32(3)));
        assert_eq!(result.get("leave_all"), Some(&FieldValue::Bool(true)));

        let types = result.get("attribute_types").unwrap().as_list().unwrap();
        assert_eq!(types[0].as_str(), Some("MAC"));
        assert_eq!(types[1].as_str(), Some("Service Requirement"));

        let first_values = result.get("first_values").unwrap().as_list().unwrap();
        assert_eq!(first_values[0].to_string(), "01:80:c2:00:00:20");
        assert_eq!(first_values[1].as_str(), Some("All Groups"));

        let events: Vec<_> = result
            .get("events")
            .unwrap()
            .as_list()
            .unwrap()
            .iter()
            .filter_map(|e| e.as_str())
            .collect();
        assert_eq!(events, vec!["New", "JoinIn", "Mt"]);
    }

    #[test]
    fn test_malformed_is_error() {
        let result = parse(&[0x00, 0x02, 0x06, 0x00, 0x01]);
        assert!(!result.is_ok());
        let error = result.error.unwrap();
        assert!(error.starts_with("MMRP: malformed frame: truncated"), "{error}");
        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_unknown_type_is_warning() {
        let data = hex::decode(["00", "0501", "0001", "ff", "00", "0000", "0000"].concat()).unwrap();
        let result = parse(&data);
        assert!(result.is_ok());
        assert_eq!(result.warnings, vec!["unknown attribute type 5 at offset 1"]);
        let types = result.get("attribute_types").unwrap().as_list().unwrap();
        assert_eq!(types[0].as_str(), Some("Unknown"));
    }

    #[test]
    fn test_reserved_leave_all_is_not_leave_all() {
        let data = MmrpFrameBuilder::new()
            .message(
                MessageBuilder::mac()
                    .vector(VectorAttributeBuilder::mac([0; 6]).leave_all_event(7).events(&[4])),
            )
            .build();
        let result = parse(&data);
        assert_parse_ok(&result);
        assert_field_eq(&result, "leave_all", &FieldValue::Bool(false));
        assert_field_eq(&result, "event_count", &FieldValue::UInt32(1));
    }

    #[test]
    fn test_padding_is_remaining() {
        let data = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let result = parse(&data);
        assert!(result.is_ok());
        assert_eq!(result.remaining, &[0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_parse_at_context_offset() {
        let pdu = MmrpFrameBuilder::new()
            .version(1)
            .message(MessageBuilder::service().vector(VectorAttributeBuilder::service(1).events(&[2])))
            .build();
        let mut packet = vec![0u8; 14];
        packet.extend_from_slice(&pdu);
        packet.extend_from_slice(&[0xee, 0xee]);

        let context = mmrp_context().with_offset(14);
        let result = MmrpProtocol::default().parse(&packet, &context);
        assert_parse_ok(&result);
        assert_field_eq(&result, "protocol_version", &FieldValue::UInt8(1));
        assert_field_eq(&result, "event_count", &FieldValue::UInt32(1));
        assert_eq!(result.remaining, &[0xee, 0xee]);

        // Decoding from byte 0 would read the zeroed header as an empty frame.
        let result = MmrpProtocol::default().parse(&packet, &mmrp_context());
        assert_field_eq(&result, "protocol_version", &FieldValue::UInt8(0));
        assert_field_eq(&result, "message_count", &FieldValue::UInt32(0));
    }

    #[test]
    fn test_malformed_remaining_starts_at_offset() {
        let packet = [0xaa, 0xbb, 0x00, 0x02];
        let result = MmrpProtocol::default().parse(&packet, &mmrp_context().with_offset(2));
        assert!(!result.is_ok());
        assert_eq!(result.remaining, &[0x00, 0x02]);
    }

    #[test]
    fn test_configured_decoder() {
        let config = DecodeConfig::new().with_implicit_end_mark(true);
        let protocol = MmrpProtocol::new(config);
        assert_eq!(protocol.config(), &config);
        assert_eq!(protocol.decoder().config(), &config);

        // Both End Marks missing.
        let data = [0x00, 0x01, 0x01, 0x00, 0x01, 0x00, 0x24];
        assert!(!MmrpProtocol::default().parse(&data, &mmrp_context()).is_ok());
        let result = protocol.parse(&data, &mmrp_context());
        assert_parse_ok(&result);
        assert_field_eq(&result, "event_count", &FieldValue::UInt32(1));
    }

    #[test]
    fn test_standalone_decode() {
        let frame = decode(&[0x00, 0x00, 0x00]).unwrap();
        assert!(frame.messages.is_empty());
    }
}
