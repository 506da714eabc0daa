//! Catalog item

use serde::{Deserialize, Serialize};

use super::Unit;

/// A sellable item priced per unit of weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    /// Display name, never used in calculations
    pub name: String,
    /// Price per one `unit`
    pub unit_price: f64,
    pub unit: Unit,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, unit_price: f64, unit: Unit) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            unit,
        }
    }
}
