//! Runtime configuration
//!
//! Read from the environment:
//! - `PRICEBOOK_CATALOG_PATH`: JSON catalog file; the built-in catalog is used when unset

use std::fmt;
use std::path::PathBuf;

use crate::catalog::{default_catalog, load_catalog, Catalog, CatalogResult};

pub const CATALOG_PATH_VAR: &str = "PRICEBOOK_CATALOG_PATH";

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => f.write_str("builtin"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl CatalogSource {
    pub fn load(&self) -> CatalogResult<Catalog> {
        match self {
            CatalogSource::Builtin => Ok(default_catalog()),
            CatalogSource::File(path) => load_catalog(path),
        }
    }
}

/// Resolve the catalog source from the environment
pub fn catalog_source() -> CatalogSource {
    source_from(std::env::var(CATALOG_PATH_VAR).ok())
}

fn source_from(value: Option<String>) -> CatalogSource {
    match value {
        Some(path) if !path.trim().is_empty() => CatalogSource::File(PathBuf::from(path)),
        _ => CatalogSource::Builtin,
    }
}

/// Resolve the source and load the catalog it points at
pub fn load() -> CatalogResult<(CatalogSource, Catalog)> {
    let source = catalog_source();
    let catalog = source.load()?;
    tracing::info!(source = %source, items = catalog.len(), "catalog loaded");
    Ok((source, catalog))
}
