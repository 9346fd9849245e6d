//! Address and byte-run formatting.

/// Format 6 bytes as a MAC address string in colon-separated hex format.
///
/// Returns `None` if the slice is not exactly 6 bytes.
///
/// # Example
///
/// ```
/// use mrpdump_core::format::format_mac;
///
/// let bytes = [0x01, 0x80, 0xc2, 0x00, 0x00, 0x20];
/// assert_eq!(format_mac(&bytes), Some("01:80:c2:00:00:20".to_string()));
/// ```
pub fn format_mac(bytes: &[u8]) -> Option<String> {
    if bytes.len() != 6 {
        return None;
    }
    Some(format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
    ))
}

/// Format an arbitrary byte run as contiguous lowercase hex.
///
/// ```
/// use mrpdump_core::format::format_hex;
///
/// assert_eq!(format_hex(&[0x00, 0x24, 0xff]), "0024ff");
/// assert_eq!(format_hex(&[]), "");
/// ```
pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
