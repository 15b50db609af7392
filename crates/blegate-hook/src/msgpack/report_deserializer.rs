use serde::Deserialize;
use serde_bytes::ByteBuf;

use crate::domain::{EnvelopeError, GatewayReport, ReportDeserializer};

/// Wire shape of the gateway envelope: a self-describing MessagePack map
/// with `ip`, `mac`, and a sequence of binary advertisement captures.
/// Unknown extra keys are ignored; a missing key is a malformed envelope.
#[derive(Debug, Deserialize)]
struct EnvelopeWire {
    ip: String,
    mac: String,
    devices: Vec<ByteBuf>,
}

/// MessagePack implementation of [`ReportDeserializer`], backed by
/// `rmp-serde`. Zero state; one instance serves the whole process.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsgpackReportDeserializer;

impl MsgpackReportDeserializer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportDeserializer for MsgpackReportDeserializer {
    fn deserialize(&self, payload: &[u8]) -> Result<GatewayReport, EnvelopeError> {
        let wire: EnvelopeWire = rmp_serde::from_slice(payload)
            .map_err(|e| EnvelopeError::Malformed(e.to_string()))?;

        Ok(GatewayReport {
            ip: wire.ip,
            mac: wire.mac,
            devices: wire.devices.into_iter().map(ByteBuf::into_vec).collect(),
        })
    }
}
