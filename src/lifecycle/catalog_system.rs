use crate::clients::ProductClient;
use crate::config::CatalogConfig;
use crate::framework::{FrameworkError, Store};
use crate::manager::ProductManager;
use crate::model::Product;
use tracing::{error, info};

/// Runtime for one catalog session: the product actor standing in for the remote API,
/// and the client used to reach it.
///
/// # Example
///
/// ```rust,no_run
/// use catalog_manager::config::CatalogConfig;
/// use catalog_manager::lifecycle::CatalogSystem;
///
/// # async fn run() -> Result<(), String> {
/// let system = CatalogSystem::new(&CatalogConfig::default());
///
/// let mut manager = system.manager();
/// manager.load().await;
///
/// // The manager holds a client too; drop it before shutting down.
/// drop(manager);
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    config: CatalogConfig,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns the product actor over an empty store.
    pub fn new(config: &CatalogConfig) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(config);
        Self::start(config, product_actor.run(), product_client)
    }

    /// Spawns the product actor over a store pre-populated with `products`, in order.
    ///
    /// Fails if two products share an id.
    pub fn with_products(
        config: &CatalogConfig,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, FrameworkError> {
        let mut store = Store::new();
        for product in products {
            store.insert(product)?;
        }
        info!(size = store.len(), "Seeding product store");

        let (product_actor, product_client) = crate::product_actor::new(config);
        let product_actor = product_actor.with_store(store);
        Ok(Self::start(config, product_actor.run(), product_client))
    }

    fn start(
        config: &CatalogConfig,
        run: impl std::future::Future<Output = ()> + Send + 'static,
        product_client: ProductClient,
    ) -> Self {
        let product_handle = tokio::spawn(run);
        Self {
            product_client,
            config: config.clone(),
            handles: vec![product_handle],
        }
    }

    /// A fresh session controller talking to this system's actor.
    pub fn manager(&self) -> ProductManager {
        ProductManager::new(self.product_client.clone(), &self.config)
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the actor's channel; the actor then drains and exits.
    /// Any other client clones (including those held by a [`ProductManager`]) must be
    /// dropped first, or this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every actor shut down cleanly
    /// - `Err(String)` if an actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
