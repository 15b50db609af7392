use blegate_payload::BeaconRecord;
use serde::Serialize;

/// What the broker should do with one publish event. Applied by the
/// transport boundary; topic and routing metadata stay untouched either way.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishDecision {
    /// Forward the message unchanged.
    PassThrough,
    /// Replace the payload with `payload`, keeping everything else.
    Rewrite {
        payload: Vec<u8>,
        summary: SightingSummary,
    },
    /// Suppress delivery entirely.
    Drop,
}

/// One recognized beacon paired with its estimated distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeaconSighting {
    #[serde(flatten)]
    pub record: BeaconRecord,
    /// Meters; absent when no estimate could be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

/// Aggregate view of one gateway report. Serialized (as JSON) into the
/// rewritten payload, so it must stay deterministic: no timestamps, no
/// randomness, field order fixed by declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SightingSummary {
    pub gateway_ip: String,
    pub gateway_mac: String,
    pub recognized: usize,
    pub unrecognized: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_distance_m: Option<f64>,
    /// Recognized sightings in capture order.
    pub beacons: Vec<BeaconSighting>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use blegate_payload::IBeacon;

    #[test]
    fn test_summary_serializes_deterministically() {
        let summary = SightingSummary {
            gateway_ip: "10.0.0.5".to_string(),
            gateway_mac: "AA:BB:CC:DD:EE:FF".to_string(),
            recognized: 1,
            unrecognized: 0,
            nearest_distance_m: Some(1.0),
            beacons: vec![BeaconSighting {
                record: BeaconRecord::IBeacon(IBeacon {
                    uuid: "FDA50693-A4E2-4FB1-AFCF-C6EB07647825".to_string(),
                    major: 1,
                    minor: 2,
                    tx_power: -59,
                    rssi: -59,
                }),
                distance_m: Some(1.0),
            }],
        };

        let first = serde_json::to_vec(&summary).unwrap();
        let second = serde_json::to_vec(&summary).unwrap();
        assert_eq!(first, second);

        let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
        assert_eq!(value["recognized"], 1);
        assert_eq!(value["beacons"][0]["format"], "ibeacon");
        assert_eq!(
            value["beacons"][0]["uuid"],
            "FDA50693-A4E2-4FB1-AFCF-C6EB07647825"
        );
    }

    #[test]
    fn test_absent_distance_is_omitted() {
        let summary = SightingSummary {
            gateway_ip: "10.0.0.5".to_string(),
            gateway_mac: "AA:BB:CC:DD:EE:FF".to_string(),
            recognized: 0,
            unrecognized: 2,
            nearest_distance_m: None,
            beacons: vec![],
        };

        let value: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("nearest_distance_m").is_none());
        assert_eq!(value["unrecognized"], 2);
    }
}
