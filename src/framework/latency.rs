//! # Simulated Network Latency
//!
//! The actor awaits a [`Latency`] before serving each request, standing in for the
//! round trip to a real backend. Production wiring uses [`SimulatedLatency`]; tests
//! inject [`NoLatency`] or run on a paused tokio clock.

use async_trait::async_trait;
use std::time::Duration;

/// The remote operation about to be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    SoftDelete,
}

/// A delay applied before each operation resolves.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn delay(&self, operation: Operation);
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn delay(&self, _operation: Operation) {}
}

/// Sleeps a fixed duration per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub soft_delete: Duration,
}

impl SimulatedLatency {
    /// Same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            create: delay,
            update: delay,
            soft_delete: delay,
        }
    }

    pub fn duration(&self, operation: Operation) -> Duration {
        match operation {
            Operation::List => self.list,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::SoftDelete => self.soft_delete,
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            create: Duration::from_millis(300),
            update: Duration::from_millis(300),
            soft_delete: Duration::from_millis(200),
        }
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn delay(&self, operation: Operation) {
        let duration = self.duration(operation);
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
