//! Parse context and result types.

use smallvec::SmallVec;

use super::FieldValue;

/// Field entry for parse results: (field_name, value).
/// Field names are always static strings (protocol-defined).
/// The lifetime parameter ties the value to the PDU buffer.
pub type FieldEntry<'data> = (&'static str, FieldValue<'data>);

/// Context handed to the registry when selecting and running a decoder.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// EtherType the payload was demultiplexed on, if known.
    pub ethertype: Option<u16>,

    /// Offset of the PDU within the buffer handed to the decoder.
    /// Bytes before it (e.g. the link-layer header) are skipped and decoded
    /// byte ranges are reported relative to the whole buffer.
    pub offset: usize,
}

impl ParseContext {
    /// Create a context for a payload demultiplexed on `ethertype`.
    pub fn new(ethertype: u16) -> Self {
        Self {
            ethertype: Some(ethertype),
            ..Self::default()
        }
    }

    /// Builder: set the payload offset within the captured packet.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Result of decoding one payload.
///
/// `fields` is a flat summary; the full record tree is available from the
/// protocol-specific decoder.
#[derive(Debug, Clone)]
pub struct ParseResult<'data> {
    /// Extracted summary values.
    pub fields: SmallVec<[FieldEntry<'data>; 16]>,

    /// Bytes following the decoded PDU (e.g. link-layer padding).
    pub remaining: &'data [u8],

    /// Fatal decode error. When set, `fields` is empty.
    pub error: Option<String>,

    /// Non-fatal conditions found while decoding, in encounter order.
    pub warnings: Vec<String>,
}

impl<'data> ParseResult<'data> {
    /// Create a successful parse result.
    pub fn success(fields: SmallVec<[FieldEntry<'data>; 16]>, remaining: &'data [u8]) -> Self {
        Self {
            fields,
            remaining,
            error: None,
            warnings: Vec::new(),
        }
    }

    /// Create an error parse result.
    pub fn error(error: String, remaining: &'data [u8]) -> Self {
        Self {
            fields: SmallVec::new(),
            remaining,
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    /// Builder: attach warnings.
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Get a field value by name (linear search, but N is small).
    pub fn get(&self, name: &str) -> Option<&FieldValue<'data>> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Check if decoding was successful.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_new() {
        let ctx = ParseContext::new(0x88F6).with_offset(14);
        assert_eq!(ctx.ethertype, Some(0x88F6));
        assert_eq!(ctx.offset, 14);
        assert_eq!(ParseContext::default().offset, 0);
    }

    #[test]
    fn test_parse_result_success() {
        let mut fields = SmallVec::new();
        fields.push(("protocol_version", FieldValue::UInt8(0)));

        let result = ParseResult::success(fields, &[]);

        assert!(result.is_ok());
        assert_eq!(result.get("protocol_version"), Some(&FieldValue::UInt8(0)));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_result_error() {
        let result = ParseResult::error("test error".to_string(), &[1, 2, 3]);

        assert!(!result.is_ok());
        assert_eq!(result.error, Some("test error".to_string()));
        assert_eq!(result.remaining, &[1, 2, 3]);
        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_parse_result_warnings() {
        let result = ParseResult::success(SmallVec::new(), &[])
            .with_warnings(vec!["unknown attribute type 9 at offset 1".to_string()]);
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
    }
}
