//! Eddystone-UID decoding.
//!
//! Unlike the iBeacon path, these frames arrive as the bare service data
//! starting at the `0xAA 0xFE` service UUID, with no gateway capture header:
//!
//! ```text
//! [00 AA FE][namespace:10][instance:6][tx power:1]
//!  0         3             13          19
//! ```
//!
//! The advertisement carries no rssi of its own; the gateway-measured value
//! is passed in by the caller.

use serde::{Deserialize, Serialize};

use crate::hex::to_upper_hex;

/// Byte offsets of the Eddystone-UID service data layout.
pub mod layout {
    /// Frame type 0x00 (UID) preceded by the Eddystone service UUID.
    pub const PREFIX: [u8; 3] = [0x00, 0xAA, 0xFE];
    pub const NAMESPACE: usize = 3;
    pub const NAMESPACE_LEN: usize = 10;
    pub const INSTANCE: usize = 13;
    pub const INSTANCE_LEN: usize = 6;
    /// Calibrated power, i8.
    pub const TX_POWER: usize = 19;
    /// Shortest frame that covers every field above.
    pub const MIN_FRAME_LEN: usize = TX_POWER + 1;
}

/// One decoded Eddystone-UID sighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EddystoneUid {
    /// 20 uppercase hex characters.
    pub namespace: String,
    /// 12 uppercase hex characters.
    pub instance: String,
    pub tx_power: i8,
    pub rssi: i8,
}

impl EddystoneUid {
    /// Decode an Eddystone-UID service data frame.
    ///
    /// `rssi` is the gateway-measured signal strength for this sighting.
    /// Returns `None` when the frame is shorter than
    /// [`layout::MIN_FRAME_LEN`] or the prefix does not match.
    pub fn parse(frame: &[u8], rssi: i8) -> Option<Self> {
        if frame.len() < layout::MIN_FRAME_LEN {
            return None;
        }
        if frame[..3] != layout::PREFIX {
            return None;
        }

        let namespace = &frame[layout::NAMESPACE..layout::NAMESPACE + layout::NAMESPACE_LEN];
        let instance = &frame[layout::INSTANCE..layout::INSTANCE + layout::INSTANCE_LEN];

        Some(Self {
            namespace: to_upper_hex(namespace),
            instance: to_upper_hex(instance),
            tx_power: frame[layout::TX_POWER] as i8,
            rssi,
        })
    }
}
