use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{BrokerHooks, PublishedMessage};
use crate::config::HookConfig;
use crate::domain::{DomainResult, EnvelopeDecoder, PublishDecision, PublishDecisionService};
use crate::msgpack::MsgpackReportDeserializer;

/// The publish-path override: inspects BLE gateway traffic and swaps the
/// payload for the decoded sighting summary. Every other hook keeps its
/// default acknowledgment.
pub struct BeaconPublishHook {
    service: PublishDecisionService,
}

impl BeaconPublishHook {
    pub fn new(service: PublishDecisionService) -> Self {
        Self { service }
    }

    /// Wire the production stack (MessagePack codec + decision service)
    /// from configuration.
    pub fn from_config(config: &HookConfig) -> DomainResult<Self> {
        let decoder = EnvelopeDecoder::new(
            config.topic_prefix.clone(),
            Arc::new(MsgpackReportDeserializer::new()),
        );
        let service = PublishDecisionService::new(
            decoder,
            config.environment_factor,
            config.rewrite_policy,
        )?;
        Ok(Self::new(service))
    }
}

#[async_trait]
impl BrokerHooks for BeaconPublishHook {
    async fn on_message_publish(&self, message: &PublishedMessage) -> PublishDecision {
        debug!(
            id = %message.id,
            node = %message.node,
            from = %message.from,
            topic = %message.topic,
            "inspecting publish"
        );
        self.service.decide(&message.topic, &message.payload)
    }
}
