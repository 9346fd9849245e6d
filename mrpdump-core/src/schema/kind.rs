//! On-wire field kinds and display bases.

/// Kind of value a registered field carries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// No value of its own; the field groups child fields.
    None,

    /// Unsigned 8-bit integer
    UInt8,

    /// Unsigned 16-bit integer (big-endian on the wire)
    UInt16,

    /// 48-bit IEEE 802 MAC address
    Ether,

    /// Variable-length opaque bytes
    Bytes,
}

impl DataKind {
    /// Human-readable type name for display.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataKind::None => "none",
            DataKind::UInt8 => "u8",
            DataKind::UInt16 => "u16",
            DataKind::Ether => "ether",
            DataKind::Bytes => "bytes",
        }
    }

    /// Size in bytes for fixed-width kinds, None for groups and byte runs.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            DataKind::UInt8 => Some(1),
            DataKind::UInt16 => Some(2),
            DataKind::Ether => Some(6),
            DataKind::None | DataKind::Bytes => None,
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Numeric base a field's value is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayBase {
    None,
    Dec,
    Hex,
}

impl DisplayBase {
    /// Render an integer in this base, zero-padded to `width` bytes for hex.
    pub fn render(&self, value: u64, width: usize) -> String {
        match self {
            DisplayBase::Hex => format!("0x{:0w$x}", value, w = width * 2),
            DisplayBase::Dec | DisplayBase::None => value.to_string(),
        }
    }
}
