//! Integration tests for the mrpdump binary.
//!
//! Runs the built CLI against synthetic PDUs and checks output and exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use mrpdump::cli::{input, OutputFormat, OutputFormatter};
use mrpdump_core::FrameDecoder;

/// Version 0, one MAC message (LeaveAll, 4 values), end marks.
const MAC_PDU: &str = "00 0206 2004 0180c2000020 2b b4 0000 0000";

/// Same PDU with the frame End Mark cut off.
const TRUNCATED_PDU: &str = "00 0206 2004 0180c2000020 2b b4 0000";

fn mrpdump(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mrpdump"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mrpdump");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_tree_from_args() {
    let output = mrpdump(&[MAC_PDU], None);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("# arg 1"));
    assert!(text.contains("MAC: 01:80:c2:00:00:20 [5..11]"));
    assert!(text.contains("Attribute Event: JoinIn (1) [11..12]"));
    assert!(text.contains("Attribute Event: Lv (5) [12..13]"));
    assert_eq!(text.matches("Attribute Event").count(), 4);
}

#[test]
fn test_malformed_exits_nonzero_after_all_payloads() {
    let output = mrpdump(&[TRUNCATED_PDU, MAC_PDU], None);
    assert!(!output.status.success());

    let text = stdout(&output);
    assert!(text.contains("# arg 1"));
    assert!(text.contains("[malformed] MMRP: malformed frame: truncated"));
    assert!(text.contains("# arg 2"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 2 payloads malformed"));
}

#[test]
fn test_implicit_end_mark_flag() {
    assert!(!mrpdump(&[TRUNCATED_PDU], None).status.success());
    assert!(mrpdump(&["--implicit-end-mark", TRUNCATED_PDU], None)
        .status
        .success());
}

#[test]
fn test_stdin_json() {
    let input = format!("# two payloads\n{MAC_PDU}\n000000\n");
    let output = mrpdump(&["--format", "json"], Some(&input));
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["payload"], "line 2");
    assert_eq!(lines[0]["fields"]["event_count"], 4);
    assert_eq!(lines[1]["fields"]["message_count"], 0);
}

#[test]
fn test_file_with_offset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut packet = vec![0u8; 14];
    packet[12..14].copy_from_slice(&[0x88, 0xf6]);
    packet.extend(input::parse_hex(MAC_PDU).unwrap());
    file.write_all(&packet).unwrap();

    let path = file.path().to_str().unwrap();
    let output = mrpdump(&["--file", path, "--offset", "14", "--format", "fields"], None);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("event_count"));
    assert!(text.contains("01:80:c2:00:00:20"));
}

#[test]
fn test_strict_flag() {
    // Packed byte 0xff is out of range.
    let pdu = "00 0206 0003 0180c2000020 ff 0000 0000";
    let lenient = mrpdump(&[pdu], None);
    assert!(lenient.status.success());
    assert!(stdout(&lenient).contains("[warning] packed event byte 0xff at offset 11"));

    assert!(!mrpdump(&["--strict", pdu], None).status.success());
}

#[test]
fn test_list_fields() {
    let output = mrpdump(&["--list-fields"], None);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("MRP-MMRP (mmrp)"));
    assert!(text.contains("mrp-mmrp.three_packed_event"));
}

#[test]
fn test_formatter_without_binary() {
    let bytes = input::parse_hex(MAC_PDU).unwrap();
    let outcome = FrameDecoder::default().decode(&bytes, 0);

    let mut out = Vec::new();
    OutputFormatter::new(OutputFormat::Fields)
        .write("lib", &outcome, &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[JoinIn, JoinIn, JoinIn, Lv]"));
    assert!(text.contains("true"));
}
