use super::EnvelopeError;

/// One raw BLE advertisement capture as forwarded by the gateway, 0 to a few
/// hundred bytes. Owned by the enclosing report.
pub type RawFrame = Vec<u8>;

/// Decoded outer payload of one gateway publish: gateway identity plus the
/// advertisement captures it observed. Built fresh per publish invocation
/// and discarded with the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReport {
    pub ip: String,
    pub mac: String,
    /// Capture order preserved; duplicates kept.
    pub devices: Vec<RawFrame>,
}

/// Deserializes the gateway envelope wire format into a [`GatewayReport`].
///
/// The codec is injected so the decision core stays independent of the
/// serialization library; the production implementation is MessagePack
/// ([`crate::msgpack::MsgpackReportDeserializer`]).
///
/// Implementations must be stateless and must report failures as
/// [`EnvelopeError::Malformed`] rather than panicking.
#[cfg_attr(test, mockall::automock)]
pub trait ReportDeserializer: Send + Sync {
    fn deserialize(&self, payload: &[u8]) -> Result<GatewayReport, EnvelopeError>;
}
