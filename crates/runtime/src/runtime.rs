//! High-level runtime orchestrator.
//!
//! The runtime owns the stash worker, wires up command/event channels, and
//! exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use stash_content::ContentFactory;
use stash_core::{ItemsSnapshot, StashConfig};

use crate::api::{Result, RuntimeError, StashHandle};
use crate::events::EventBus;
use crate::workers::{Command, StashWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub stash_config: StashConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stash_config: StashConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime owning the stash worker.
///
/// [`StashHandle`] provides a cloneable façade for clients.
pub struct StashRuntime {
    handle: StashHandle,
    worker_handle: JoinHandle<()>,
}

impl StashRuntime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> StashHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every outstanding [`StashHandle`] clone has been
    /// dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`StashRuntime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<ItemsSnapshot>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stash_config(mut self, stash_config: StashConfig) -> Self {
        self.config.stash_config = stash_config;
        self
    }

    pub fn catalog(mut self, catalog: ItemsSnapshot) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Loads `config.toml` and `items.ron` from a content directory.
    pub fn content(self, factory: &ContentFactory) -> Result<Self> {
        let stash_config = factory.load_config()?;
        let catalog = factory.load_catalog()?;
        Ok(self.stash_config(stash_config).catalog(catalog))
    }

    /// Spawns the stash worker. Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<StashRuntime> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = StashHandle::new(command_tx, event_bus.clone());

        let worker = StashWorker::new(
            Arc::new(catalog),
            self.config.stash_config,
            command_rx,
            event_bus,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(StashRuntime {
            handle,
            worker_handle,
        })
    }
}
