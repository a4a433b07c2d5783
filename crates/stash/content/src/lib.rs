//! Data-driven content for the stash engine.
//!
//! This crate loads the static inputs the engine consumes read-only:
//! - Item catalogs (data-driven via RON)
//! - Equipment layouts: slots, allow-lists and container sub-grids (TOML)
//! - Engine configuration (TOML)
//!
//! Content never appears in equipment state; it is handed to the engine as an
//! [`ItemOracle`](stash_core::ItemOracle) and a resolved layout.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LayoutLoader};
