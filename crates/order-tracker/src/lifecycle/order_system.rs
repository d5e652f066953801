use crate::clients::OrderClient;
use crate::config::TrackerConfig;
use crate::order_actor;
use crate::store::ActorOrderStore;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// The runtime orchestrator of the order tracker.
///
/// `OrderSystem` starts the order actor, hands out stores bound to it and shuts it down.
///
/// # Example
///
/// ```rust
/// use order_tracker::config::TrackerConfig;
/// use order_tracker::lifecycle::OrderSystem;
/// use order_tracker::store::OrderStore;
///
/// #[tokio::main]
/// async fn main() {
///     let system = OrderSystem::new(&TrackerConfig::default().without_latency());
///     let store = system.store();
///     assert_eq!(store.list().await.unwrap().len(), 5);
///
///     drop(store);
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    latency: Duration,

    /// Task handle of the order actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Spawns the order actor, seeded or empty according to `config`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &TrackerConfig) -> Self {
        let (actor, client) = if config.seed_demo_data {
            order_actor::seeded(config.channel_capacity)
        } else {
            order_actor::new(config.channel_capacity)
        };

        // Orders have no dependencies (Context = ())
        let handle = tokio::spawn(actor.run(()));
        info!(
            latency_ms = config.latency_ms,
            seeded = config.seed_demo_data,
            "Order system started"
        );

        Self {
            order_client: OrderClient::new(client),
            latency: config.latency(),
            handle,
        }
    }

    /// A store bound to the running actor, with the configured latency.
    pub fn store(&self) -> ActorOrderStore {
        ActorOrderStore::new(self.order_client.clone(), self.latency)
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the system's client closes the actor's channel once every store and view
    /// handed out by [`store`](Self::store) has been dropped too; until then this waits.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(LifecycleError::ActorTaskFailed(format!("{e:?}")));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
