//! # Configuration
//!
//! Tunables for a catalog session. The crate never reads files or environment variables
//! itself; a host embeds [`CatalogConfig`] in its own configuration (every field has a
//! serde default) or builds it in code.

use crate::framework::SimulatedLatency;
use serde::Deserialize;
use std::time::Duration;

/// Rows per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Capacity of the request channel in front of the product actor.
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub page_size: usize,
    pub channel_buffer: usize,
    pub latency: LatencyConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            latency: LatencyConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Same settings with every simulated delay removed, for tests and scripted runs.
    pub fn without_latency(mut self) -> Self {
        self.latency = LatencyConfig::none();
        self
    }
}

/// Simulated round-trip time per remote operation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub list_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub soft_delete_ms: u64,
}

impl LatencyConfig {
    pub fn none() -> Self {
        Self {
            list_ms: 0,
            create_ms: 0,
            update_ms: 0,
            soft_delete_ms: 0,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: 300,
            create_ms: 300,
            update_ms: 300,
            soft_delete_ms: 200,
        }
    }
}

impl From<&LatencyConfig> for SimulatedLatency {
    fn from(config: &LatencyConfig) -> Self {
        Self {
            list: Duration::from_millis(config.list_ms),
            create: Duration::from_millis(config.create_ms),
            update: Duration::from_millis(config.update_ms),
            soft_delete: Duration::from_millis(config.soft_delete_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_latency_matches_simulated_default() {
        let latency = SimulatedLatency::from(&LatencyConfig::default());
        assert_eq!(latency, SimulatedLatency::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{ "page_size": 25, "latency": { "list_ms": 0 } }"#).unwrap();

        assert_eq!(config.page_size, 25);
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
        assert_eq!(config.latency.list_ms, 0);
        assert_eq!(config.latency.soft_delete_ms, 200);
    }

    #[test]
    fn without_latency_zeroes_every_delay() {
        let config = CatalogConfig::default().without_latency();
        assert_eq!(
            SimulatedLatency::from(&config.latency),
            SimulatedLatency::uniform(Duration::ZERO)
        );
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
