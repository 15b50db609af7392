/// Render bytes as uppercase hex, two characters per byte.
pub(crate) fn to_upper_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}
