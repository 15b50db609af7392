use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::domain::RewritePolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct HookConfig {
    /// Topic prefix identifying BLE gateway publishes.
    #[serde(default = "default_topic_prefix")]
    pub topic_prefix: String,

    /// Path-loss environment factor for distance estimates
    /// (2.0 open space, up to ~4.0 obstructed).
    #[serde(default = "default_environment_factor")]
    pub environment_factor: f64,

    /// Rewrite every matching publish, or only those with at least one
    /// recognized beacon.
    #[serde(default)]
    pub rewrite_policy: RewritePolicy,
}

fn default_topic_prefix() -> String {
    "BLE111444/".to_string()
}

fn default_environment_factor() -> f64 {
    blegate_payload::DEFAULT_ENVIRONMENT_FACTOR
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            topic_prefix: default_topic_prefix(),
            environment_factor: default_environment_factor(),
            rewrite_policy: RewritePolicy::default(),
        }
    }
}

impl HookConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(Environment::with_prefix("BLEGATE"))
            .build()?
            .try_deserialize()?;

        if !config.environment_factor.is_finite() || config.environment_factor <= 0.0 {
            return Err(ConfigError::Message(format!(
                "environment_factor must be positive and finite, got {}",
                config.environment_factor
            )));
        }

        Ok(config)
    }
}
