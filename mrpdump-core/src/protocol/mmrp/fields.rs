//! Registered MMRP fields and value tables.

use crate::schema::{DataKind, DisplayBase, FieldDescriptor, ProtocolSchema, ValueNames};

use super::vector::{LEAVE_ALL_EVENT_MASK, NUMBER_OF_VALUES_MASK};

/// MMRP attribute type codes.
pub mod attribute_type {
    pub const SERVICE_REQUIREMENT: u8 = 0x01;
    pub const MAC: u8 = 0x02;
}

pub const ATTRIBUTE_TYPE_NAMES: ValueNames = &[
    (attribute_type::SERVICE_REQUIREMENT as u32, "Service Requirement"),
    (attribute_type::MAC as u32, "MAC"),
];

pub const LEAVE_ALL_NAMES: ValueNames = &[(0, "Null"), (1, "Leave All")];

pub const THREE_PACKED_NAMES: ValueNames = &[
    (0, "New"),
    (1, "JoinIn"),
    (2, "In"),
    (3, "JoinMt"),
    (4, "Mt"),
    (5, "Lv"),
];

pub const SERVICE_REQUIREMENT_NAMES: ValueNames =
    &[(0, "All Groups"), (1, "All Unregistered Groups")];

pub static PROTOCOL: FieldDescriptor =
    FieldDescriptor::group("Multiple Mac Registration Protocol", "mrp-mmrp");

pub static PROTOCOL_VERSION: FieldDescriptor =
    FieldDescriptor::new("Protocol Version", "mrp-mmrp.protocol_version", DataKind::UInt8)
        .with_base(DisplayBase::Dec);

pub static MESSAGE: FieldDescriptor = FieldDescriptor::group("Message", "mrp-mmrp.message");

pub static ATTRIBUTE_TYPE: FieldDescriptor =
    FieldDescriptor::new("Attribute Type", "mrp-mmrp.attribute_type", DataKind::UInt8)
        .with_base(DisplayBase::Dec)
        .with_value_names(ATTRIBUTE_TYPE_NAMES);

pub static ATTRIBUTE_LENGTH: FieldDescriptor =
    FieldDescriptor::new("Attribute Length", "mrp-mmrp.attribute_length", DataKind::UInt8)
        .with_base(DisplayBase::Dec);

pub static ATTRIBUTE_LIST: FieldDescriptor =
    FieldDescriptor::group("Attribute List", "mrp-mmrp.attribute_list");

pub static VECTOR_ATTRIBUTE: FieldDescriptor =
    FieldDescriptor::group("Vector Attribute", "mrp-mmrp.vector_attribute");

pub static VECTOR_HEADER: FieldDescriptor =
    FieldDescriptor::new("Vector Header", "mrp-mmrp.vector_header", DataKind::UInt16)
        .with_base(DisplayBase::Hex);

pub static LEAVE_ALL_EVENT: FieldDescriptor =
    FieldDescriptor::new("Leave All Event", "mrp-mmrp.leave_all_event", DataKind::UInt16)
        .with_base(DisplayBase::Dec)
        .with_value_names(LEAVE_ALL_NAMES)
        .with_bitmask(LEAVE_ALL_EVENT_MASK as u32);

pub static NUMBER_OF_VALUES: FieldDescriptor =
    FieldDescriptor::new("Number of Values", "mrp-mmrp.number_of_values", DataKind::UInt16)
        .with_base(DisplayBase::Dec)
        .with_bitmask(NUMBER_OF_VALUES_MASK as u32);

pub static FIRST_VALUE: FieldDescriptor =
    FieldDescriptor::group("First Value", "mrp-mmrp.first_value");

pub static MAC: FieldDescriptor = FieldDescriptor::new("MAC", "mrp-mmrp.mac", DataKind::Ether);

pub static SERVICE_REQUIREMENT: FieldDescriptor = FieldDescriptor::new(
    "Service Requirement",
    "mrp-mmrp.service_requirement",
    DataKind::UInt8,
)
.with_base(DisplayBase::Dec)
.with_value_names(SERVICE_REQUIREMENT_NAMES);

pub static RAW_VALUE: FieldDescriptor =
    FieldDescriptor::new("Value", "mrp-mmrp.value", DataKind::Bytes)
        .with_description("First value of an attribute type without a known layout");

pub static THREE_PACKED_EVENT: FieldDescriptor =
    FieldDescriptor::new("Attribute Event", "mrp-mmrp.three_packed_event", DataKind::UInt8)
        .with_base(DisplayBase::Dec)
        .with_value_names(THREE_PACKED_NAMES);

pub static END_MARK: FieldDescriptor =
    FieldDescriptor::new("End Mark", "mrp-mmrp.end_mark", DataKind::UInt16)
        .with_base(DisplayBase::Hex);

pub static TRAILER: FieldDescriptor =
    FieldDescriptor::new("Trailer", "mrp-mmrp.trailer", DataKind::Bytes)
        .with_description("Bytes after the final End Mark, usually link-layer padding");

/// Every registered MMRP field, in tree order.
pub fn all() -> ProtocolSchema {
    vec![
        &PROTOCOL,
        &PROTOCOL_VERSION,
        &MESSAGE,
        &ATTRIBUTE_TYPE,
        &ATTRIBUTE_LENGTH,
        &ATTRIBUTE_LIST,
        &VECTOR_ATTRIBUTE,
        &VECTOR_HEADER,
        &LEAVE_ALL_EVENT,
        &NUMBER_OF_VALUES,
        &FIRST_VALUE,
        &MAC,
        &SERVICE_REQUIREMENT,
        &RAW_VALUE,
        &THREE_PACKED_EVENT,
        &END_MARK,
        &TRAILER,
    ]
}
