//! iBeacon decoding for gateway capture frames.
//!
//! The scanning gateway prefixes each advertisement with its own capture
//! header before forwarding it, so the layout here is the gateway's record
//! format, not the bare BLE advertising PDU:
//!
//! ```text
//! [adv type:1][device mac:6][rssi:1][ad header:7][02 15][uuid:16][major:2][minor:2][tx power:1]
//!  0           1             7       8            15     17       33       35       37
//! ```
//!
//! The rssi at byte 7 is measured by the gateway; the beacon itself only
//! broadcasts the calibrated tx power at the tail.

use serde::{Deserialize, Serialize};

use crate::hex::to_upper_hex;

/// Byte offsets of the gateway capture layout. Every indexed read in
/// [`IBeacon::parse`] goes through these names.
pub mod layout {
    /// Gateway-measured signal strength.
    pub const GATEWAY_RSSI: usize = 7;
    /// Start of the two-byte iBeacon marker.
    pub const MARKER: usize = 15;
    /// Apple proximity beacon type and length, `0x02 0x15`.
    pub const MARKER_BYTES: [u8; 2] = [0x02, 0x15];
    /// Start of the 16-byte proximity UUID.
    pub const UUID: usize = 17;
    pub const UUID_LEN: usize = 16;
    /// Big-endian u16 immediately after the UUID.
    pub const MAJOR: usize = 33;
    /// Big-endian u16 after major.
    pub const MINOR: usize = 35;
    /// Calibrated power at one meter, i8.
    pub const TX_POWER: usize = 37;
    /// Shortest frame that covers every field above.
    pub const MIN_FRAME_LEN: usize = TX_POWER + 1;
}

/// One decoded iBeacon sighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IBeacon {
    /// Hyphenated 8-4-4-4-12 uppercase hex, always 36 characters.
    pub uuid: String,
    pub major: u16,
    pub minor: u16,
    pub tx_power: i8,
    pub rssi: i8,
}

impl IBeacon {
    /// Decode a gateway capture frame.
    ///
    /// Returns `None` when the frame is shorter than
    /// [`layout::MIN_FRAME_LEN`] or the marker bytes do not match.
    pub fn parse(frame: &[u8]) -> Option<Self> {
        if frame.len() < layout::MIN_FRAME_LEN {
            return None;
        }
        if frame[layout::MARKER..layout::MARKER + 2] != layout::MARKER_BYTES {
            return None;
        }

        let uuid_bytes = &frame[layout::UUID..layout::UUID + layout::UUID_LEN];
        let major = u16::from_be_bytes([frame[layout::MAJOR], frame[layout::MAJOR + 1]]);
        let minor = u16::from_be_bytes([frame[layout::MINOR], frame[layout::MINOR + 1]]);

        Some(Self {
            uuid: format_uuid(uuid_bytes),
            major,
            minor,
            tx_power: frame[layout::TX_POWER] as i8,
            rssi: frame[layout::GATEWAY_RSSI] as i8,
        })
    }
}

/// Render 16 raw bytes as a hyphenated UUID string in transmission order,
/// no byte swapping.
fn format_uuid(bytes: &[u8]) -> String {
    let hex = to_upper_hex(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..]
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A capture taken from a live gateway: uuid FDA50693-A4E2-4FB1-AFCF-
    /// C6EB07647825, major 0x74E5, minor 0x9BC9, tx power -55, rssi -74.
    pub(crate) fn sample_frame() -> Vec<u8> {
        vec![
            0x00, // adv type
            0x45, 0xC6, 0x6A, 0xF1, 0x73, 0x59, // device mac
            0xB6, // gateway rssi (-74)
            0x02, 0x01, 0x06, 0x1A, 0xFF, 0xFF, 0xFF, // ad header
            0x02, 0x15, // marker
            0xFD, 0xA5, 0x06, 0x93, 0xA4, 0xE2, 0x4F, 0xB1, // uuid
            0xAF, 0xCF, 0xC6, 0xEB, 0x07, 0x64, 0x78, 0x25,
            0x74, 0xE5, // major
            0x9B, 0xC9, // minor
            0xC9, // tx power (-55)
        ]
    }

    #[test]
    fn test_parse_sample_frame() {
        let beacon = IBeacon::parse(&sample_frame()).unwrap();
        assert_eq!(beacon.uuid, "FDA50693-A4E2-4FB1-AFCF-C6EB07647825");
        assert_eq!(beacon.major, 0x74E5);
        assert_eq!(beacon.minor, 0x9BC9);
        assert_eq!(beacon.tx_power, -55);
        assert_eq!(beacon.rssi, -74);
    }

    #[test]
    fn test_uuid_is_always_36_chars() {
        let beacon = IBeacon::parse(&sample_frame()).unwrap();
        assert_eq!(beacon.uuid.len(), 36);
    }

    #[test]
    fn test_every_truncated_length_is_rejected() {
        let frame = sample_frame();
        for len in 0..layout::MIN_FRAME_LEN {
            assert!(
                IBeacon::parse(&frame[..len]).is_none(),
                "length {} should not parse",
                len
            );
        }
    }

    #[test]
    fn test_wrong_marker_is_rejected() {
        let mut frame = sample_frame();
        frame[layout::MARKER] = 0x03;
        assert!(IBeacon::parse(&frame).is_none());

        let mut frame = sample_frame();
        frame[layout::MARKER + 1] = 0x16;
        assert!(IBeacon::parse(&frame).is_none());
    }

    #[test]
    fn test_positive_rssi_byte_reads_as_signed() {
        let mut frame = sample_frame();
        frame[layout::GATEWAY_RSSI] = 0x20;
        let beacon = IBeacon::parse(&frame).unwrap();
        assert_eq!(beacon.rssi, 32);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let mut frame = sample_frame();
        frame.extend_from_slice(&[0xDE, 0xAD]);
        let beacon = IBeacon::parse(&frame).unwrap();
        assert_eq!(beacon.major, 0x74E5);
    }
}
