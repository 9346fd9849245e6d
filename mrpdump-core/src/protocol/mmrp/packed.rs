//! Three-packed attribute events.
//!
//! Each byte carries three base-6 digits, `e0*36 + e1*6 + e2`. The final
//! byte of a run may carry fewer than three live events; its trailing digits
//! are computed and dropped.

use crate::error::ProtocolError;

use super::config::DecodeConfig;
use super::cursor::{Cursor, Span};

/// Largest byte value that encodes three valid digits.
pub const MAX_PACKED_BYTE: u8 = 215;

/// MRP attribute event carried in a three-packed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeEvent {
    New,
    JoinIn,
    In,
    JoinMt,
    Mt,
    Lv,
    /// First digit of an out-of-range byte (6 or 7).
    Unknown(u8),
}

impl AttributeEvent {
    pub fn from_digit(digit: u8) -> Self {
        match digit {
            0 => AttributeEvent::New,
            1 => AttributeEvent::JoinIn,
            2 => AttributeEvent::In,
            3 => AttributeEvent::JoinMt,
            4 => AttributeEvent::Mt,
            5 => AttributeEvent::Lv,
            other => AttributeEvent::Unknown(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match self {
            AttributeEvent::New => 0,
            AttributeEvent::JoinIn => 1,
            AttributeEvent::In => 2,
            AttributeEvent::JoinMt => 3,
            AttributeEvent::Mt => 4,
            AttributeEvent::Lv => 5,
            AttributeEvent::Unknown(d) => *d,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeEvent::New => "New",
            AttributeEvent::JoinIn => "JoinIn",
            AttributeEvent::In => "In",
            AttributeEvent::JoinMt => "JoinMt",
            AttributeEvent::Mt => "Mt",
            AttributeEvent::Lv => "Lv",
            AttributeEvent::Unknown(_) => "Unknown",
        }
    }
}

impl std::fmt::Display for AttributeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded event and the byte it was unpacked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedEvent {
    pub event: AttributeEvent,
    pub span: Span,
}

/// Split a packed byte into its three digits, most significant first.
#[inline]
pub const fn unpack_three(byte: u8) -> [u8; 3] {
    let e0 = byte / 36;
    let rest = byte - 36 * e0;
    let e1 = rest / 6;
    let e2 = rest - 6 * e1;
    [e0, e1, e2]
}

/// Bytes needed to carry `n` three-packed events.
#[inline]
pub const fn packed_len(n: usize) -> usize {
    n.div_ceil(3)
}

/// Consume `packed_len(n)` bytes and emit exactly `n` events.
///
/// The whole run is bounds-checked before anything is decoded. Bytes above
/// [`MAX_PACKED_BYTE`] are fatal under `strict_packed_events`; otherwise they
/// are recorded in `diagnostics` and their first digit becomes
/// [`AttributeEvent::Unknown`].
pub fn expand_events(
    cursor: &mut Cursor<'_>,
    n: usize,
    config: &DecodeConfig,
    diagnostics: &mut Vec<ProtocolError>,
) -> Result<Vec<PackedEvent>, ProtocolError> {
    let start = cursor.position();
    let bytes = cursor.read_bytes(packed_len(n))?;

    let mut events = Vec::with_capacity(n);
    for (i, &byte) in bytes.iter().enumerate() {
        let offset = start + i;
        if byte > MAX_PACKED_BYTE {
            let err = ProtocolError::MalformedPackedByte {
                offset,
                value: byte,
            };
            if err.is_fatal(config.strict_packed_events) {
                return Err(err);
            }
            tracing::debug!(offset, value = byte, "out-of-range packed event byte");
            diagnostics.push(err);
        }

        let span = Span::new(offset, offset + 1);
        for digit in unpack_three(byte) {
            if events.len() == n {
                break;
            }
            events.push(PackedEvent {
                event: AttributeEvent::from_digit(digit),
                span,
            });
        }
    }

    Ok(events)
}
