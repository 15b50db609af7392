use std::sync::Arc;

use tracing::debug;

use super::{EnvelopeError, GatewayReport, ReportDeserializer};

/// Decodes the outer gateway payload from one publish event.
///
/// Holds only the configured topic prefix and the injected wire codec, so a
/// single instance serves concurrent invocations without locking.
pub struct EnvelopeDecoder {
    topic_prefix: String,
    deserializer: Arc<dyn ReportDeserializer>,
}

impl EnvelopeDecoder {
    pub fn new(
        topic_prefix: impl Into<String>,
        deserializer: Arc<dyn ReportDeserializer>,
    ) -> Self {
        Self {
            topic_prefix: topic_prefix.into(),
            deserializer,
        }
    }

    /// Decode `payload` into a [`GatewayReport`].
    ///
    /// Returns [`EnvelopeError::NotApplicable`] when `topic` is outside the
    /// configured gateway prefix, without touching the payload. A matching
    /// topic with an undecodable payload reports
    /// [`EnvelopeError::Malformed`].
    pub fn decode(&self, topic: &str, payload: &[u8]) -> Result<GatewayReport, EnvelopeError> {
        if !topic.starts_with(&self.topic_prefix) {
            return Err(EnvelopeError::NotApplicable);
        }

        let report = self.deserializer.deserialize(payload)?;

        debug!(
            topic = %topic,
            gateway_ip = %report.ip,
            gateway_mac = %report.mac,
            device_count = report.devices.len(),
            "decoded gateway report"
        );

        Ok(report)
    }
}
