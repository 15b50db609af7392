use serde::{Deserialize, Serialize};

use crate::eddystone::EddystoneUid;
use crate::ibeacon::IBeacon;

/// One decoded advertisement capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum BeaconRecord {
    #[serde(rename = "ibeacon")]
    IBeacon(IBeacon),
    EddystoneUid(EddystoneUid),
    /// Neither format matched; only the frame length is kept for diagnostics.
    Unrecognized { frame_len: usize },
}

impl BeaconRecord {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized { .. })
    }

    pub fn tx_power(&self) -> Option<i8> {
        match self {
            Self::IBeacon(b) => Some(b.tx_power),
            Self::EddystoneUid(b) => Some(b.tx_power),
            Self::Unrecognized { .. } => None,
        }
    }

    pub fn rssi(&self) -> Option<i8> {
        match self {
            Self::IBeacon(b) => Some(b.rssi),
            Self::EddystoneUid(b) => Some(b.rssi),
            Self::Unrecognized { .. } => None,
        }
    }
}

/// Decode one raw advertisement capture into a [`BeaconRecord`].
///
/// Dispatch tries iBeacon first, then Eddystone-UID; the marker bytes are
/// disjoint so at most one format matches. `gateway_rssi` feeds the Eddystone
/// record, whose advertisement carries no rssi of its own; iBeacon captures
/// embed the gateway reading in the frame itself. Never fails: anything
/// unparseable comes back as [`BeaconRecord::Unrecognized`].
pub fn decode_frame(frame: &[u8], gateway_rssi: Option<i8>) -> BeaconRecord {
    if let Some(beacon) = IBeacon::parse(frame) {
        return BeaconRecord::IBeacon(beacon);
    }
    if let Some(beacon) = EddystoneUid::parse(frame, gateway_rssi.unwrap_or(0)) {
        return BeaconRecord::EddystoneUid(beacon);
    }
    BeaconRecord::Unrecognized {
        frame_len: frame.len(),
    }
}
