//! Output formatting for decoded PDUs.
//!
//! The tree format walks the flattened field stream, the fields format
//! prints the per-PDU summary as a table, and the JSON format writes one
//! object per payload.

use std::io::Write;

use clap::ValueEnum;
use mrpdump_core::protocol::mmrp::MmrpProtocol;
use mrpdump_core::{format_hex, FieldValue, MmrpFrame, ProtocolError, ProtocolSchema, TreeItem};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented field tree with byte ranges (default)
    Tree,
    /// Summary table
    Fields,
    /// JSON Lines (one JSON object per payload)
    Json,
}

/// Formats decode results for output.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format one payload's decode outcome and write it to `writer`.
    pub fn write<W: Write>(
        &self,
        label: &str,
        outcome: &Result<MmrpFrame<'_>, ProtocolError>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Tree => self.write_tree(label, outcome, writer),
            OutputFormat::Fields => self.write_fields(label, outcome, writer),
            OutputFormat::Json => self.write_json(label, outcome, writer),
        }
    }

    fn write_tree<W: Write>(
        &self,
        label: &str,
        outcome: &Result<MmrpFrame<'_>, ProtocolError>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(writer, "# {label}")?;
        match outcome {
            Ok(frame) => {
                for item in frame.items() {
                    writeln!(
                        writer,
                        "{:indent$}{}",
                        "",
                        render_item(&item),
                        indent = item.depth * 2
                    )?;
                }
                for diagnostic in &frame.diagnostics {
                    writeln!(writer, "[warning] {diagnostic}")?;
                }
            }
            Err(e) => writeln!(writer, "[malformed] MMRP: malformed frame: {e}")?,
        }
        Ok(())
    }

    fn write_fields<W: Write>(
        &self,
        label: &str,
        outcome: &Result<MmrpFrame<'_>, ProtocolError>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        use comfy_table::{Cell, Table};

        let mut table = Table::new();
        table.set_header(vec![Cell::new("Field"), Cell::new(label)]);

        match outcome {
            Ok(frame) => {
                for (name, value) in MmrpProtocol::summarize(frame) {
                    table.add_row(vec![Cell::new(name), Cell::new(value.to_string())]);
                }
                for diagnostic in &frame.diagnostics {
                    table.add_row(vec![Cell::new("warning"), Cell::new(diagnostic.to_string())]);
                }
                if !frame.trailer.is_empty() {
                    table.add_row(vec![Cell::new("trailer"), Cell::new(format_hex(frame.trailer))]);
                }
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new("error"),
                    Cell::new(format!("MMRP: malformed frame: {e}")),
                ]);
            }
        }

        writeln!(writer, "{table}")
    }

    fn write_json<W: Write>(
        &self,
        label: &str,
        outcome: &Result<MmrpFrame<'_>, ProtocolError>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let mut obj = serde_json::Map::new();
        obj.insert("payload".to_string(), label.into());

        match outcome {
            Ok(frame) => {
                obj.insert("ok".to_string(), true.into());

                let mut fields = serde_json::Map::new();
                for (name, value) in MmrpProtocol::summarize(frame) {
                    fields.insert(name.to_string(), field_value_to_json(&value));
                }
                obj.insert("fields".to_string(), fields.into());

                let warnings: Vec<serde_json::Value> = frame
                    .diagnostics
                    .iter()
                    .map(|d| d.to_string().into())
                    .collect();
                obj.insert("warnings".to_string(), warnings.into());

                let items: Vec<serde_json::Value> =
                    frame.items().iter().map(item_to_json).collect();
                obj.insert("items".to_string(), items.into());

                obj.insert("trailer".to_string(), format_hex(frame.trailer).into());
            }
            Err(e) => {
                obj.insert("ok".to_string(), false.into());
                obj.insert(
                    "error".to_string(),
                    format!("MMRP: malformed frame: {e}").into(),
                );
                if let Some(offset) = e.offset() {
                    obj.insert("error_offset".to_string(), offset.into());
                }
            }
        }

        writeln!(writer, "{}", serde_json::Value::Object(obj))
    }
}

/// Render one tree line: label, value, value name and byte range.
pub fn render_item(item: &TreeItem<'_>) -> String {
    let field = item.field;
    if field.is_group() {
        return format!("{} [{}]", field.label, item.span);
    }
    format!("{}: {} [{}]", field.label, render_value(item), item.span)
}

fn render_value(item: &TreeItem<'_>) -> String {
    let field = item.field;
    let Some(bits) = item.field_bits() else {
        return item.value.to_string();
    };

    let width = field.kind.fixed_size().unwrap_or(1);
    let rendered = field.base.render(bits as u64, width);
    match field.value_name(bits) {
        Some(name) => format!("{name} ({rendered})"),
        None if field.value_names.is_some() => format!("Unknown ({rendered})"),
        None => rendered,
    }
}

fn item_to_json(item: &TreeItem<'_>) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("field".to_string(), item.field.name.into());
    obj.insert("depth".to_string(), item.depth.into());
    obj.insert("start".to_string(), item.span.start.into());
    obj.insert("end".to_string(), item.span.end.into());
    if item.value.is_null() {
        return serde_json::Value::Object(obj);
    }
    match item.field_bits() {
        Some(bits) => {
            obj.insert("value".to_string(), bits.into());
            if item.field.bitmask != 0 {
                obj.insert("raw".to_string(), field_value_to_json(&item.value));
            }
            if let Some(name) = item.field.value_name(bits) {
                obj.insert("name".to_string(), name.into());
            }
        }
        None => {
            obj.insert("value".to_string(), field_value_to_json(&item.value));
        }
    }
    serde_json::Value::Object(obj)
}

/// Convert a field value to JSON, keeping numbers numeric.
pub fn field_value_to_json(value: &FieldValue<'_>) -> serde_json::Value {
    match value {
        FieldValue::UInt8(v) => (*v).into(),
        FieldValue::UInt16(v) => (*v).into(),
        FieldValue::UInt32(v) => (*v).into(),
        FieldValue::Bool(v) => (*v).into(),
        FieldValue::List(items) => items.iter().map(field_value_to_json).collect(),
        FieldValue::Null => serde_json::Value::Null,
        other => other.to_string().into(),
    }
}

/// Print the registered field table.
pub fn write_field_table<W: Write>(schema: &ProtocolSchema, writer: &mut W) -> std::io::Result<()> {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Label",
        "Filter",
        "Type",
        "Base",
        "Bitmask",
        "Values",
        "Description",
    ]);

    for field in schema {
        let mask = if field.bitmask == 0 {
            String::new()
        } else {
            format!("{:#06x}", field.bitmask)
        };
        let values = field
            .value_names
            .map(|names| {
                names
                    .iter()
                    .map(|(raw, name)| format!("{raw}={name}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(field.label),
            Cell::new(field.name),
            Cell::new(field.kind),
            Cell::new(format!("{:?}", field.base)),
            Cell::new(mask),
            Cell::new(values),
            Cell::new(field.description.unwrap_or_default()),
        ]);
    }

    writeln!(writer, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrpdump_core::FrameDecoder;

    const PDU: [u8; 11] = [
        0x00, 0x01, 0x01, 0x20, 0x01, 0x01, 0x24, 0x00, 0x00, 0x00, 0x00,
    ];

    fn render(format: OutputFormat, outcome: &Result<MmrpFrame<'_>, ProtocolError>) -> String {
        let mut out = Vec::new();
        OutputFormatter::new(format)
            .write("test", outcome, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tree_output() {
        let outcome = FrameDecoder::default().decode(&PDU, 0);
        let text = render(OutputFormat::Tree, &outcome);

        assert!(text.starts_with("# test\n"));
        assert!(text.contains("Multiple Mac Registration Protocol [0..11]"));
        assert!(text.contains("  Protocol Version: 0 [0..1]"));
        assert!(text.contains("    Attribute Type: Service Requirement (1) [1..2]"));
        assert!(text.contains("          Leave All Event: Leave All (1) [3..5]"));
        assert!(text.contains("        Vector Header: 0x2001 [3..5]"));
        assert!(text.contains("          Service Requirement: All Unregistered Groups (1) [5..6]"));
        assert!(text.contains("        Attribute Event: JoinIn (1) [6..7]"));
        assert!(!text.contains("[warning]"));
    }

    #[test]
    fn test_tree_output_malformed() {
        let outcome = FrameDecoder::default().decode(&PDU[..5], 0);
        let text = render(OutputFormat::Tree, &outcome);
        assert!(text.contains("[malformed] MMRP: malformed frame: truncated at offset 5"));
    }

    #[test]
    fn test_fields_output() {
        let outcome = FrameDecoder::default().decode(&PDU, 0);
        let text = render(OutputFormat::Fields, &outcome);
        assert!(text.contains("message_count"));
        assert!(text.contains("All Unregistered Groups"));
        assert!(text.contains("[JoinIn]"));
    }

    #[test]
    fn test_json_output() {
        let outcome = FrameDecoder::default().decode(&PDU, 0);
        let text = render(OutputFormat::Json, &outcome);
        let json: serde_json::Value = serde_json::from_str(text.trim()).unwrap();

        assert_eq!(json["payload"], "test");
        assert_eq!(json["ok"], true);
        assert_eq!(json["fields"]["message_count"], 1);
        assert_eq!(json["fields"]["leave_all"], true);
        assert_eq!(json["fields"]["events"][0], "JoinIn");
        assert_eq!(json["items"][1]["field"], "mrp-mmrp.protocol_version");
        assert_eq!(json["trailer"], "");

        let leave_all = &json["items"][8];
        assert_eq!(leave_all["field"], "mrp-mmrp.leave_all_event");
        assert_eq!(leave_all["value"], 1);
        assert_eq!(leave_all["raw"], 0x2001);
        assert_eq!(leave_all["name"], "Leave All");
        assert_eq!(json["items"][9]["value"], 1);
        assert!(json["items"][7].get("raw").is_none());
    }

    #[test]
    fn test_json_output_malformed() {
        let outcome = FrameDecoder::default().decode(&PDU[..7], 0);
        let text = render(OutputFormat::Json, &outcome);
        let json: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error_offset"], 7);
    }

    #[test]
    fn test_field_table() {
        let schema = mrpdump_core::default_registry().combined_schema();
        let mut out = Vec::new();
        write_field_table(&schema, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("mrp-mmrp.leave_all_event"));
        assert!(text.contains("0xe000"));
        assert!(text.contains("5=Lv"));
        assert!(text.contains("Description"));
        assert!(text.contains("usually link-layer padding"));
    }

    #[test]
    fn test_field_value_to_json() {
        assert_eq!(field_value_to_json(&FieldValue::UInt16(36)), 36);
        assert_eq!(
            field_value_to_json(&FieldValue::MacAddr([1, 0x80, 0xc2, 0, 0, 0x20])),
            "01:80:c2:00:00:20"
        );
        assert_eq!(
            field_value_to_json(&FieldValue::List(vec![FieldValue::Str("New")])),
            serde_json::json!(["New"])
        );
    }
}
