use async_trait::async_trait;

use crate::domain::PublishDecision;

/// Hook points the provider announces to the broker on load.
pub const REGISTERED_HOOKS: &[&str] = &[
    "client.connect",
    "client.connack",
    "client.connected",
    "client.disconnected",
    "client.authenticate",
    "client.authorize",
    "client.subscribe",
    "client.unsubscribe",
    "session.created",
    "session.subscribed",
    "session.unsubscribed",
    "session.resumed",
    "session.discarded",
    "session.takenover",
    "session.terminated",
    "message.publish",
    "message.delivered",
    "message.acked",
    "message.dropped",
];

/// One in-flight publish as seen at the hook boundary. Everything except the
/// payload is propagated unchanged whatever the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub id: String,
    /// Broker node the message entered on.
    pub node: String,
    /// Publishing client.
    pub from: String,
    pub topic: String,
    pub payload: Vec<u8>,
}

/// Capability set a broker transport mounts on its hook surface.
///
/// Every hook has a default body so implementors override only the paths
/// that carry logic: lifecycle and session hooks acknowledge silently,
/// authentication and authorization allow, and `on_message_publish` passes
/// the message through untouched. The transport invokes these once per
/// broker event and applies whatever comes back.
#[async_trait]
pub trait BrokerHooks: Send + Sync {
    /// Hook names to register with the broker when the provider loads.
    fn registered_hooks(&self) -> &'static [&'static str] {
        REGISTERED_HOOKS
    }

    async fn on_client_connect(&self, _client_id: &str) {}

    async fn on_client_connack(&self, _client_id: &str) {}

    async fn on_client_connected(&self, _client_id: &str) {}

    async fn on_client_disconnected(&self, _client_id: &str) {}

    /// `true` allows the connection; the broker stops its auth chain on
    /// this answer.
    async fn on_client_authenticate(&self, _client_id: &str) -> bool {
        true
    }

    /// `true` allows the operation on `_topic`.
    async fn on_client_authorize(&self, _client_id: &str, _topic: &str) -> bool {
        true
    }

    async fn on_client_subscribe(&self, _client_id: &str, _topic: &str) {}

    async fn on_client_unsubscribe(&self, _client_id: &str, _topic: &str) {}

    async fn on_session_created(&self, _client_id: &str) {}

    async fn on_session_subscribed(&self, _client_id: &str, _topic: &str) {}

    async fn on_session_unsubscribed(&self, _client_id: &str, _topic: &str) {}

    async fn on_session_resumed(&self, _client_id: &str) {}

    async fn on_session_discarded(&self, _client_id: &str) {}

    async fn on_session_takenover(&self, _client_id: &str) {}

    async fn on_session_terminated(&self, _client_id: &str) {}

    /// Decide what the broker does with an in-flight publish.
    async fn on_message_publish(&self, _message: &PublishedMessage) -> PublishDecision {
        PublishDecision::PassThrough
    }

    async fn on_message_delivered(&self, _client_id: &str, _topic: &str) {}

    async fn on_message_acked(&self, _client_id: &str, _topic: &str) {}

    async fn on_message_dropped(&self, _topic: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Acknowledger;

    impl BrokerHooks for Acknowledger {}

    #[test]
    fn test_registered_hooks_cover_every_capability() {
        let hooks = Acknowledger.registered_hooks();
        assert_eq!(hooks.len(), 19);
        assert!(hooks.contains(&"message.publish"));
        assert!(hooks.contains(&"client.authenticate"));
        assert!(hooks.contains(&"session.takenover"));
    }

    #[tokio::test]
    async fn test_default_auth_hooks_allow() {
        let hooks = Acknowledger;
        assert!(hooks.on_client_authenticate("client-1").await);
        assert!(hooks.on_client_authorize("client-1", "t/1").await);
    }

    #[tokio::test]
    async fn test_default_publish_hook_passes_through() {
        let message = PublishedMessage {
            id: "msg-1".to_string(),
            node: "node-a".to_string(),
            from: "client-1".to_string(),
            topic: "t/1".to_string(),
            payload: vec![0x01],
        };
        let decision = Acknowledger.on_message_publish(&message).await;
        assert_eq!(decision, PublishDecision::PassThrough);
    }

    #[tokio::test]
    async fn test_default_lifecycle_hooks_acknowledge() {
        let hooks = Acknowledger;
        hooks.on_client_connect("client-1").await;
        hooks.on_session_created("client-1").await;
        hooks.on_message_dropped("t/1").await;
    }
}
