//! mrpdump - decode MRP application PDUs from the command line.
//!
//! The decoding itself lives in `mrpdump-core`; this crate reads payloads
//! and renders what the core produces.
//!
//! # Example
//!
//! ```
//! use mrpdump::cli::{OutputFormat, OutputFormatter};
//! use mrpdump_core::FrameDecoder;
//!
//! let pdu = [0x00, 0x00, 0x00];
//! let outcome = FrameDecoder::default().decode(&pdu, 0);
//!
//! let mut out = Vec::new();
//! OutputFormatter::new(OutputFormat::Tree).write("example", &outcome, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("End Mark"));
//! ```

pub mod cli;

pub use mrpdump_core as core;
