//! Catalog module
//!
//! In-memory item catalog and the ways it gets populated at startup.

pub mod seed;
pub mod store;

pub use seed::{default_catalog, default_items, load_catalog, CatalogError, CatalogResult};
pub use store::Catalog;
