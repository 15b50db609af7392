use blegate_payload::{decode_frame, estimate_distance, BeaconRecord};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::{
    BeaconSighting, DomainError, DomainResult, EnvelopeDecoder, EnvelopeError, PublishDecision,
    SightingSummary,
};

/// When the engine replaces a publish payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewritePolicy {
    /// Rewrite every matching publish, recognized beacons or not.
    #[default]
    Always,
    /// Rewrite only when at least one frame decoded to a known format.
    WhenRecognized,
}

/// Produces the pass-through/rewrite/drop decision for one publish event.
///
/// Flow:
/// 1. Decode the outer gateway envelope (topic prefix + injected codec)
/// 2. Decode every captured advertisement frame
/// 3. Estimate distance for each recognized beacon
/// 4. Aggregate into a summary and rewrite the payload per policy
///
/// Holds only immutable configuration, so invocations run fully in parallel
/// and identical `(topic, payload)` input always yields an identical
/// decision. Envelope failures degrade to pass-through; a single corrupt
/// frame degrades to an unrecognized entry without aborting the report.
pub struct PublishDecisionService {
    envelope_decoder: EnvelopeDecoder,
    environment_factor: f64,
    rewrite_policy: RewritePolicy,
}

impl PublishDecisionService {
    /// Rejects a non-positive or non-finite `environment_factor` up front so
    /// `decide` never has to.
    pub fn new(
        envelope_decoder: EnvelopeDecoder,
        environment_factor: f64,
        rewrite_policy: RewritePolicy,
    ) -> DomainResult<Self> {
        if !environment_factor.is_finite() || environment_factor <= 0.0 {
            return Err(DomainError::InvalidEnvironmentFactor(environment_factor));
        }
        Ok(Self {
            envelope_decoder,
            environment_factor,
            rewrite_policy,
        })
    }

    #[instrument(skip(self, payload), fields(payload_size = payload.len()))]
    pub fn decide(&self, topic: &str, payload: &[u8]) -> PublishDecision {
        let report = match self.envelope_decoder.decode(topic, payload) {
            Ok(report) => report,
            Err(EnvelopeError::NotApplicable) => {
                debug!("topic outside gateway prefix, passing through");
                return PublishDecision::PassThrough;
            }
            Err(EnvelopeError::Malformed(reason)) => {
                warn!(reason = %reason, "malformed gateway envelope, passing through");
                return PublishDecision::PassThrough;
            }
        };

        let mut beacons = Vec::new();
        let mut unrecognized = 0usize;

        for frame in &report.devices {
            match decode_frame(frame, None) {
                BeaconRecord::Unrecognized { frame_len } => {
                    debug!(frame_len, "unrecognized advertisement frame");
                    unrecognized += 1;
                }
                record => {
                    let distance_m = self.estimate_for(&record);
                    beacons.push(BeaconSighting { record, distance_m });
                }
            }
        }

        let nearest_distance_m = beacons
            .iter()
            .filter_map(|sighting| sighting.distance_m)
            .reduce(f64::min);

        let summary = SightingSummary {
            gateway_ip: report.ip,
            gateway_mac: report.mac,
            recognized: beacons.len(),
            unrecognized,
            nearest_distance_m,
            beacons,
        };

        if summary.recognized == 0 && self.rewrite_policy == RewritePolicy::WhenRecognized {
            debug!(
                unrecognized = summary.unrecognized,
                "no recognized beacons, passing through per rewrite policy"
            );
            return PublishDecision::PassThrough;
        }

        match serde_json::to_vec(&summary) {
            Ok(payload) => {
                debug!(
                    recognized = summary.recognized,
                    unrecognized = summary.unrecognized,
                    nearest_distance_m = summary.nearest_distance_m,
                    "rewriting gateway publish"
                );
                PublishDecision::Rewrite { payload, summary }
            }
            Err(e) => {
                warn!(error = %e, "failed to serialize sighting summary, passing through");
                PublishDecision::PassThrough
            }
        }
    }

    fn estimate_for(&self, record: &BeaconRecord) -> Option<f64> {
        let (tx_power, rssi) = match (record.tx_power(), record.rssi()) {
            (Some(tx_power), Some(rssi)) => (tx_power, rssi),
            _ => return None,
        };

        match estimate_distance(tx_power, rssi, self.environment_factor) {
            Ok(distance) => Some(distance),
            Err(e) => {
                warn!(error = %e, "distance estimate failed");
                None
            }
        }
    }
}
