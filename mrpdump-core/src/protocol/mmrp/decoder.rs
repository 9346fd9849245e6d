//! Frame decoder: the Message and Vector Attribute loops.
//!
//! Neither loop has a length prefix. Before each record the decoder peeks
//! two bytes; 0x0000 is an End Mark and ends the loop, anything else is
//! committed to as the start of the next record.

use tracing::{debug, trace};

use crate::error::ProtocolError;

use super::config::DecodeConfig;
use super::cursor::Cursor;
use super::message::{read_message_header, MessageHeader};
use super::packed::{expand_events, packed_len};
use super::tree::{EndMark, FirstValue, Message, MmrpFrame, VectorAttribute};
use super::vector::read_vector_header;

/// Value of an End Mark.
pub const END_MARK: u16 = 0x0000;

/// What the next two bytes hold.
enum Lookahead {
    EndMark(EndMark),
    /// End of buffer accepted as an End Mark.
    Implicit,
    Record,
}

/// Decodes one MMRP PDU into an [`MmrpFrame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDecoder {
    config: DecodeConfig,
}

impl FrameDecoder {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decode the PDU starting at `offset` in `buf`.
    ///
    /// All spans in the result are absolute positions in `buf`. A fatal
    /// error aborts the decode; nothing decoded before it is returned.
    pub fn decode<'a>(&self, buf: &'a [u8], offset: usize) -> Result<MmrpFrame<'a>, ProtocolError> {
        let mut cursor = Cursor::new(buf, offset);
        let mut diagnostics = Vec::new();

        let protocol_version = cursor.read_u8()?;
        let version_span = cursor.span_from(offset);
        trace!(offset, protocol_version, "decoding MMRP frame");

        let mut messages = Vec::new();
        let end_mark = loop {
            match self.lookahead(&mut cursor)? {
                Lookahead::EndMark(mark) => break Some(mark),
                Lookahead::Implicit => break None,
                Lookahead::Record => {}
            }
            if let Some(limit) = self.config.max_messages {
                if messages.len() >= limit {
                    return Err(ProtocolError::TooManyMessages { limit });
                }
            }
            messages.push(self.decode_message(&mut cursor, &mut diagnostics)?);
        };

        let span = cursor.span_from(offset);
        let trailer = buf.get(span.end..).unwrap_or_default();
        debug!(
            messages = messages.len(),
            diagnostics = diagnostics.len(),
            trailer = trailer.len(),
            "decoded MMRP frame"
        );

        Ok(MmrpFrame {
            protocol_version,
            version_span,
            messages,
            end_mark,
            trailer,
            diagnostics,
            span,
        })
    }

    /// Peek for an End Mark and consume it if present.
    fn lookahead(&self, cursor: &mut Cursor<'_>) -> Result<Lookahead, ProtocolError> {
        if self.config.implicit_end_mark && cursor.is_at_end() {
            return Ok(Lookahead::Implicit);
        }
        if cursor.peek_u16()? != END_MARK {
            return Ok(Lookahead::Record);
        }
        let start = cursor.position();
        cursor.skip(2)?;
        Ok(Lookahead::EndMark(EndMark {
            span: cursor.span_from(start),
        }))
    }

    fn decode_message<'a>(
        &self,
        cursor: &mut Cursor<'a>,
        diagnostics: &mut Vec<ProtocolError>,
    ) -> Result<Message<'a>, ProtocolError> {
        let start = cursor.position();
        let header = read_message_header(cursor)?;
        self.check_header(&header, diagnostics)?;
        trace!(
            offset = start,
            attribute_type = header.attribute_type.raw(),
            attribute_length = header.attribute_length,
            "message"
        );

        let list_start = cursor.position();
        let mut vector_attributes = Vec::new();
        let end_mark = loop {
            match self.lookahead(cursor)? {
                Lookahead::EndMark(mark) => break Some(mark),
                Lookahead::Implicit => break None,
                Lookahead::Record => {}
            }
            vector_attributes.push(self.decode_vector_attribute(cursor, &header, diagnostics)?);
        };

        Ok(Message {
            header,
            vector_attributes,
            end_mark,
            attribute_list_span: cursor.span_from(list_start),
            span: cursor.span_from(start),
        })
    }

    /// Unknown types and unexpected lengths are diagnostics unless strict.
    fn check_header(
        &self,
        header: &MessageHeader,
        diagnostics: &mut Vec<ProtocolError>,
    ) -> Result<(), ProtocolError> {
        let Some(expected) = header.attribute_type.expected_length() else {
            debug!(
                offset = header.type_span.start,
                value = header.attribute_type.raw(),
                "unknown attribute type"
            );
            diagnostics.push(ProtocolError::UnknownAttributeType {
                offset: header.type_span.start,
                value: header.attribute_type.raw(),
            });
            return Ok(());
        };

        if header.attribute_length != expected {
            let err = ProtocolError::AttributeLengthMismatch {
                offset: header.length_span.start,
                attribute_type: header.attribute_type.raw(),
                expected,
                actual: header.attribute_length,
            };
            if err.is_fatal(self.config.strict_attribute_length) {
                return Err(err);
            }
            debug!(%err, "attribute length mismatch");
            diagnostics.push(err);
        }
        Ok(())
    }

    fn decode_vector_attribute<'a>(
        &self,
        cursor: &mut Cursor<'a>,
        message: &MessageHeader,
        diagnostics: &mut Vec<ProtocolError>,
    ) -> Result<VectorAttribute<'a>, ProtocolError> {
        let start = cursor.position();
        let header = read_vector_header(cursor)?;
        let header_span = cursor.span_from(start);

        let first_value_start = cursor.position();
        let first_value_bytes = cursor.read_bytes(message.attribute_length as usize)?;
        let first_value = FirstValue::interpret(message.attribute_type, first_value_bytes);
        let first_value_span = cursor.span_from(first_value_start);

        let n = header.number_of_values as usize;
        let events = expand_events(cursor, n, &self.config, diagnostics)?;

        let span = cursor.span_from(start);
        debug_assert_eq!(
            span.len(),
            2 + message.attribute_length as usize + packed_len(n)
        );
        trace!(offset = start, number_of_values = n, len = span.len(), "vector attribute");

        Ok(VectorAttribute {
            header,
            header_span,
            first_value,
            first_value_span,
            events,
            span,
        })
    }
}
