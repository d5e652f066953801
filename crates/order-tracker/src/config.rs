//! Runtime knobs for the order tracker.
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings used by [`OrderSystem`](crate::lifecycle::OrderSystem) when it starts.
///
/// Missing fields fall back to their defaults when deserializing, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Simulated round-trip latency applied to every store call.
    pub latency_ms: u64,
    /// Capacity of the order actor's request channel.
    pub channel_capacity: usize,
    /// Start with the five demo orders instead of an empty store.
    pub seed_demo_data: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            channel_capacity: 32,
            seed_demo_data: true,
        }
    }
}

impl TrackerConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Same settings with the simulated latency turned off.
    pub fn without_latency(self) -> Self {
        Self {
            latency_ms: 0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.latency(), Duration::from_millis(300));
        assert_eq!(config.channel_capacity, 32);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{ "latency_ms": 0, "seed_demo_data": false }"#).unwrap();
        assert_eq!(
            config,
            TrackerConfig {
                latency_ms: 0,
                channel_capacity: 32,
                seed_demo_data: false,
            }
        );
        assert_eq!(TrackerConfig::default().without_latency().latency_ms, 0);
    }
}
