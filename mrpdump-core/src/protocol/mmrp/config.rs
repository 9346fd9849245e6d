//! Decoder configuration.

/// Strictness and limits for [`FrameDecoder`](super::FrameDecoder).
///
/// The default decodes anything the wire grammar allows and reports
/// questionable content as diagnostics rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    /// Reject packed event bytes above 215 instead of decoding them digit-wise.
    pub strict_packed_events: bool,

    /// Require AttributeLength 6 for MAC and 1 for Service Requirement.
    pub strict_attribute_length: bool,

    /// Accept end of buffer where an End Mark is expected.
    pub implicit_end_mark: bool,

    /// Stop with an error after this many messages.
    pub max_messages: Option<usize>,
}

impl DecodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both strictness switches on.
    pub fn strict() -> Self {
        Self {
            strict_packed_events: true,
            strict_attribute_length: true,
            ..Self::default()
        }
    }

    pub fn with_strict_packed_events(mut self, strict: bool) -> Self {
        self.strict_packed_events = strict;
        self
    }

    pub fn with_strict_attribute_length(mut self, strict: bool) -> Self {
        self.strict_attribute_length = strict;
        self
    }

    pub fn with_implicit_end_mark(mut self, allow: bool) -> Self {
        self.implicit_end_mark = allow;
        self
    }

    pub fn with_max_messages(mut self, limit: usize) -> Self {
        self.max_messages = Some(limit);
        self
    }
}
