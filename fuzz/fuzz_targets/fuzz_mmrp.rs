//! Fuzz target for the MMRP decoder.
//!
//! Tests:
//! - Registry dispatch on the MMRP EtherType
//! - Bounds checking in every reader, lenient and strict
//! - Span consistency of successfully decoded frames

#![no_main]

use libfuzzer_sys::fuzz_target;
use mrpdump_core::protocol::ethertype;
use mrpdump_core::{default_registry, parse_payload, DecodeConfig, FrameDecoder};

fuzz_target!(|data: &[u8]| {
    let registry = default_registry();
    let _ = parse_payload(&registry, ethertype::MMRP, data);

    for config in [
        DecodeConfig::default(),
        DecodeConfig::strict().with_implicit_end_mark(true),
    ] {
        if let Ok(frame) = FrameDecoder::new(config).decode(data, 0) {
            assert_eq!(frame.span.end + frame.trailer.len(), data.len());
            for item in frame.items() {
                assert!(item.span.start <= item.span.end);
                assert!(item.span.end <= data.len());
            }
        }
    }
});
