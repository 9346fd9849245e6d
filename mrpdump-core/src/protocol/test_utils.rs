//! Test utilities for protocol decoding.
//!
//! Provides builders that encode MMRP PDUs from construction parameters and
//! helper functions for validating parse results.

use super::{ethertype, FieldValue, ParseContext, ParseResult};

/// Builder for one Vector Attribute.
#[derive(Debug, Clone)]
pub struct VectorAttributeBuilder {
    leave_all: u8,
    first_value: Vec<u8>,
    events: Vec<u8>,
    number_of_values: Option<u16>,
}

impl VectorAttributeBuilder {
    /// Vector Attribute with an arbitrary FirstValue.
    pub fn raw(first_value: Vec<u8>) -> Self {
        Self {
            leave_all: 0,
            first_value,
            events: Vec::new(),
            number_of_values: None,
        }
    }

    pub fn mac(mac: [u8; 6]) -> Self {
        Self::raw(mac.to_vec())
    }

    pub fn service(requirement: u8) -> Self {
        Self::raw(vec![requirement])
    }

    pub fn leave_all(self) -> Self {
        self.leave_all_event(1)
    }

    pub fn leave_all_event(mut self, value: u8) -> Self {
        self.leave_all = value & 0x07;
        self
    }

    /// Event digits (0..=5), three per packed byte.
    pub fn events(mut self, events: &[u8]) -> Self {
        self.events = events.to_vec();
        self
    }

    /// Override the NumberOfValues written to the header.
    pub fn number_of_values(mut self, n: u16) -> Self {
        self.number_of_values = Some(n);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let n = self.number_of_values.unwrap_or(self.events.len() as u16) & 0x1FFF;
        let header = ((self.leave_all as u16) << 13) | n;

        let mut out = Vec::with_capacity(2 + self.first_value.len() + self.events.len() / 3 + 1);
        out.extend_from_slice(&header.to_be_bytes());
        out.extend_from_slice(&self.first_value);
        for chunk in self.events.chunks(3) {
            let digit = |i: usize| chunk.get(i).copied().unwrap_or(0);
            out.push(digit(0) * 36 + digit(1) * 6 + digit(2));
        }
        out
    }
}

/// Builder for one Message.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    attribute_type: u8,
    attribute_length: u8,
    vectors: Vec<VectorAttributeBuilder>,
    end_mark: bool,
}

impl MessageBuilder {
    pub fn new(attribute_type: u8, attribute_length: u8) -> Self {
        Self {
            attribute_type,
            attribute_length,
            vectors: Vec::new(),
            end_mark: true,
        }
    }

    pub fn mac() -> Self {
        Self::new(0x02, 6)
    }

    pub fn service() -> Self {
        Self::new(0x01, 1)
    }

    pub fn vector(mut self, vector: VectorAttributeBuilder) -> Self {
        self.vectors.push(vector);
        self
    }

    /// Omit the attribute list End Mark.
    pub fn without_end_mark(mut self) -> Self {
        self.end_mark = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![self.attribute_type, self.attribute_length];
        for vector in &self.vectors {
            out.extend(vector.build());
        }
        if self.end_mark {
            out.extend_from_slice(&[0x00, 0x00]);
        }
        out
    }
}

/// Builder for a complete MMRP PDU.
#[derive(Debug, Clone)]
pub struct MmrpFrameBuilder {
    version: u8,
    messages: Vec<MessageBuilder>,
    end_mark: bool,
    trailer: Vec<u8>,
}

impl Default for MmrpFrameBuilder {
    fn default() -> Self {
        Self {
            version: 0,
            messages: Vec::new(),
            end_mark: true,
            trailer: Vec::new(),
        }
    }
}

impl MmrpFrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn message(mut self, message: MessageBuilder) -> Self {
        self.messages.push(message);
        self
    }

    /// Omit the frame End Mark.
    pub fn without_end_mark(mut self) -> Self {
        self.end_mark = false;
        self
    }

    /// Bytes appended after the frame End Mark.
    pub fn trailer(mut self, trailer: Vec<u8>) -> Self {
        self.trailer = trailer;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![self.version];
        for message in &self.messages {
            out.extend(message.build());
        }
        if self.end_mark {
            out.extend_from_slice(&[0x00, 0x00]);
        }
        out.extend_from_slice(&self.trailer);
        out
    }
}

/// Helper to assert a field value equals expected.
pub fn assert_field_eq(result: &ParseResult, field: &str, expected: &FieldValue) {
    let actual = result
        .get(field)
        .unwrap_or_else(|| panic!("Field '{}' not found in result", field));
    assert_eq!(
        actual, expected,
        "Field '{}' mismatch: expected {:?}, got {:?}",
        field, expected, actual
    );
}

/// Helper to assert decoding succeeded.
pub fn assert_parse_ok(result: &ParseResult) {
    assert!(result.is_ok(), "Parse failed: {:?}", result.error);
}

/// Parse context for a payload demultiplexed on the MMRP EtherType.
pub fn mmrp_context() -> ParseContext {
    ParseContext::new(ethertype::MMRP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_builder() {
        let vector = VectorAttributeBuilder::mac([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
            .leave_all()
            .events(&[1, 0, 0, 5])
            .build();

        assert_eq!(vector.len(), 2 + 6 + 2);
        assert_eq!(&vector[0..2], &[0x20, 0x04]); // LeaveAll, 4 values
        assert_eq!(vector[8], 36);
        assert_eq!(vector[9], 5 * 36);
    }

    #[test]
    fn test_number_of_values_override() {
        let vector = VectorAttributeBuilder::service(1)
            .number_of_values(9)
            .build();
        assert_eq!(vector, vec![0x00, 0x09, 0x01]);
    }

    #[test]
    fn test_frame_builder() {
        let frame = MmrpFrameBuilder::new()
            .version(1)
            .message(MessageBuilder::service().vector(VectorAttributeBuilder::service(0).events(&[2])))
            .trailer(vec![0xee])
            .build();

        assert_eq!(
            frame,
            vec![0x01, 0x01, 0x01, 0x00, 0x01, 0x00, 72, 0x00, 0x00, 0x00, 0x00, 0xee]
        );
    }

    #[test]
    fn test_without_end_marks() {
        let frame = MmrpFrameBuilder::new()
            .message(MessageBuilder::mac().without_end_mark())
            .without_end_mark()
            .build();
        assert_eq!(frame, vec![0x00, 0x02, 0x06]);
    }
}
