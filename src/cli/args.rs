//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use mrpdump_core::DecodeConfig;

use super::OutputFormat;

/// Decode MMRP (IEEE 802.1Q Multiple MAC Registration Protocol) PDUs.
///
/// Payloads start at the MRP protocol version byte, i.e. after the
/// Ethernet header and EtherType 0x88F6, unless --offset says otherwise.
#[derive(Parser, Debug)]
#[command(name = "mrpdump")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Hex-encoded payloads; `-` or none reads one payload per line from stdin
    #[arg(value_name = "HEX")]
    pub payloads: Vec<String>,

    /// Read one raw binary payload from a file
    #[arg(short = 'f', long = "file", value_name = "PATH", conflicts_with = "payloads")]
    pub file: Option<PathBuf>,

    /// Byte offset of the MMRP PDU within each payload
    #[arg(long = "offset", default_value = "0")]
    pub offset: usize,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "tree")]
    pub format: OutputFormat,

    /// Treat out-of-range packed events and bad attribute lengths as malformed
    #[arg(long = "strict")]
    pub strict: bool,

    /// Accept end of payload in place of a missing End Mark
    #[arg(long = "implicit-end-mark")]
    pub implicit_end_mark: bool,

    /// Reject PDUs carrying more than this many messages
    #[arg(long = "max-messages", value_name = "N")]
    pub max_messages: Option<usize>,

    /// List registered fields and exit
    #[arg(long = "list-fields")]
    pub list_fields: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Decoder configuration selected by the flags.
    pub fn decode_config(&self) -> DecodeConfig {
        let config = DecodeConfig::default()
            .with_strict_packed_events(self.strict)
            .with_strict_attribute_length(self.strict)
            .with_implicit_end_mark(self.implicit_end_mark);
        match self.max_messages {
            Some(limit) => config.with_max_messages(limit),
            None => config,
        }
    }

    /// Whether payloads come from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.is_none()
            && (self.payloads.is_empty() || self.payloads.iter().all(|p| p == "-"))
    }

    /// Log filter implied by the -v count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
