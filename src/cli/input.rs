//! Payload input: hex arguments, hex lines on stdin, or a raw file.

use std::io::BufRead;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// One payload to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Where the payload came from, for output headers.
    pub label: String,
    pub bytes: Vec<u8>,
}

/// Decode a hex string, ignoring whitespace, `:`/`-` separators and a `0x` prefix.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    if digits.is_empty() {
        bail!("empty payload");
    }
    hex::decode(&digits).with_context(|| format!("invalid hex payload: {text}"))
}

/// Payloads given as command-line arguments.
pub fn from_args(args: &[String]) -> Result<Vec<Payload>> {
    args.iter()
        .enumerate()
        .map(|(i, text)| {
            Ok(Payload {
                label: format!("arg {}", i + 1),
                bytes: parse_hex(text)?,
            })
        })
        .collect()
}

/// One payload per non-empty line; lines starting with `#` are comments.
pub fn from_lines<R: BufRead>(reader: R) -> Result<Vec<Payload>> {
    let mut payloads = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        payloads.push(Payload {
            label: format!("line {}", i + 1),
            bytes: parse_hex(text).with_context(|| format!("line {}", i + 1))?,
        });
    }
    Ok(payloads)
}

/// A raw binary payload file.
pub fn from_file(path: &Path) -> Result<Payload> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read payload file: {}", path.display()))?;
    Ok(Payload {
        label: path.display().to_string(),
        bytes,
    })
}
