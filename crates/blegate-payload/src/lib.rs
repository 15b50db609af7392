//! Beacon advertisement payload decoding for BLE gateway captures.
//!
//! A gateway forwards each nearby advertisement as a raw byte capture. This
//! crate decodes the two supported fixed-layout formats (iBeacon and
//! Eddystone-UID) into typed records and estimates the gateway-to-beacon
//! distance from tx power and rssi.
//!
//! Decoding is total: a frame that matches neither format comes back as
//! [`BeaconRecord::Unrecognized`] rather than an error.

mod codec;
pub mod eddystone;
mod error;
mod hex;
pub mod ibeacon;
mod proximity;

pub use codec::{decode_frame, BeaconRecord};
pub use eddystone::EddystoneUid;
pub use error::{PayloadError, Result};
pub use ibeacon::IBeacon;
pub use proximity::{estimate_distance, DEFAULT_ENVIRONMENT_FACTOR};
