//! Vector Header decoding.

use crate::error::ProtocolError;

use super::cursor::Cursor;
use super::fields;

pub const LEAVE_ALL_EVENT_MASK: u16 = 0xE000;
pub const NUMBER_OF_VALUES_MASK: u16 = 0x1FFF;
pub const MAX_NUMBER_OF_VALUES: u16 = NUMBER_OF_VALUES_MASK;

/// The 3-bit LeaveAllEvent of a Vector Header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveAllEvent {
    Null,
    LeaveAll,
    Reserved(u8),
}

impl LeaveAllEvent {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => LeaveAllEvent::Null,
            1 => LeaveAllEvent::LeaveAll,
            other => LeaveAllEvent::Reserved(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match self {
            LeaveAllEvent::Null => 0,
            LeaveAllEvent::LeaveAll => 1,
            LeaveAllEvent::Reserved(v) => *v,
        }
    }
}

/// A decoded Vector Header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorHeader {
    pub raw: u16,
    pub leave_all: LeaveAllEvent,
    pub number_of_values: u16,
}

impl VectorHeader {
    /// Split the header word along the registered field bitmasks.
    pub fn from_raw(raw: u16) -> Self {
        let word = raw as u32;
        Self {
            raw,
            leave_all: LeaveAllEvent::from_raw(fields::LEAVE_ALL_EVENT.masked(word) as u8),
            number_of_values: fields::NUMBER_OF_VALUES.masked(word) as u16,
        }
    }
}

/// Read the big-endian Vector Header at the cursor.
pub fn read_vector_header(cursor: &mut Cursor<'_>) -> Result<VectorHeader, ProtocolError> {
    cursor.read_u16().map(VectorHeader::from_raw)
}
