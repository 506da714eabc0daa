//! Catalog seeding
//!
//! The built-in demonstration catalog and the JSON catalog file loader.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::Catalog;
use crate::models::{Item, Unit};

/// Catalog loading error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog item {id}: {reason}")]
    InvalidItem { id: i64, reason: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// The built-in item set
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new(1, "Apples", 1.45, Unit::Kg),
        Item::new(2, "Bananas", 1.23, Unit::Kg),
        Item::new(3, "Saffron", 2.35, Unit::G),
        Item::new(4, "Cherries", 4.56, Unit::Kg),
        Item::new(5, "Potatoes", 0.89, Unit::Kg),
        Item::new(6, "Carrots", 1.10, Unit::Kg),
        Item::new(7, "Onions", 0.95, Unit::Kg),
        Item::new(8, "Tomatoes", 2.80, Unit::Kg),
        Item::new(9, "Walnuts", 9.10, Unit::Kg),
        Item::new(10, "Lemons", 2.15, Unit::Kg),
        Item::new(11, "Pears", 1.99, Unit::Kg),
        Item::new(12, "Grapes", 2.64, Unit::Kg),
        Item::new(13, "Peppercorns", 0.06, Unit::G),
        Item::new(14, "Rice", 1.75, Unit::Kg),
        Item::new(15, "Lentils", 2.40, Unit::Kg),
        Item::new(16, "Vanilla pods", 1.78, Unit::G),
    ]
}

pub fn default_catalog() -> Catalog {
    default_items().into_iter().collect()
}

/// Load a catalog from a JSON array of items
///
/// ```json
/// [{"id": 1, "name": "Apples", "unit_price": 1.45, "unit": "kg"}]
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> CatalogResult<Catalog> {
    let raw = fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&raw)?;

    // Reject the whole file on the first bad item
    for item in &items {
        validate_item(item)?;
    }

    Ok(items.into_iter().collect())
}

/// Ids must be positive and prices non-negative
fn validate_item(item: &Item) -> CatalogResult<()> {
    if item.id <= 0 {
        return Err(CatalogError::InvalidItem {
            id: item.id,
            reason: "id must be positive".to_string(),
        });
    }
    if !item.unit_price.is_finite() || item.unit_price < 0.0 {
        return Err(CatalogError::InvalidItem {
            id: item.id,
            reason: format!("unit_price must be non-negative, got {}", item.unit_price),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_catalog_reference_items() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 16);

        let saffron = catalog.get(3).unwrap();
        assert_eq!(saffron.unit, Unit::G);
        assert_eq!(saffron.unit_price, 2.35);

        let grapes = catalog.get(12).unwrap();
        assert_eq!(grapes.unit, Unit::Kg);
        assert_eq!(grapes.unit_price, 2.64);

        let vanilla = catalog.get(16).unwrap();
        assert_eq!(vanilla.unit, Unit::G);
        assert_eq!(vanilla.unit_price, 1.78);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 21, "name": "Figs", "unit_price": 7.5, "unit": "kg"}},
                {{"id": 22, "name": "Cloves", "unit_price": 0.04, "unit": "g"}},
                {{"id": 21, "name": "Dried figs", "unit_price": 11.0, "unit": "kg"}}
            ]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(21).unwrap().name, "Dried figs");
        assert_eq!(catalog.get(22).unwrap().unit, Unit::G);
    }

    #[test]
    fn test_load_catalog_rejects_unknown_unit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "name": "Milk", "unit_price": 1.0, "unit": "l"}}]"#).unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_load_catalog_rejects_non_positive_id() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 1, "name": "Apples", "unit_price": 1.45, "unit": "kg"}},
                {{"id": 0, "name": "Ghost", "unit_price": 1.0, "unit": "kg"}}
            ]"#
        )
        .unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidItem { id: 0, .. }), "{}", err);
    }

    #[test]
    fn test_load_catalog_rejects_negative_price() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 5, "name": "Refund", "unit_price": -0.5, "unit": "g"}}]"#).unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidItem { id: 5, .. }));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_default_items_are_valid() {
        for item in default_items() {
            assert!(validate_item(&item).is_ok(), "item {}", item.id);
        }
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
