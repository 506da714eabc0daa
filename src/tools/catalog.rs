//! Catalog MCP tools
//!
//! Read-only lookups into the item catalog.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{Item, Unit};
use crate::pricing::normalize_price;

/// Item detail including its per-kilogram price
#[derive(Debug, Serialize)]
pub struct ItemDetail {
    pub id: i64,
    pub name: String,
    pub unit_price: f64,
    pub unit: Unit,
    pub kg_price: f64,
}

impl From<&Item> for ItemDetail {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            unit: item.unit,
            kg_price: normalize_price(item.unit_price, item.unit),
        }
    }
}

/// Response for list_items
#[derive(Debug, Serialize)]
pub struct ListItemsResponse {
    pub items: Vec<ItemDetail>,
    pub total: usize,
}

pub fn get_item(catalog: &Catalog, id: i64) -> Option<ItemDetail> {
    catalog.get(id).map(ItemDetail::from)
}

/// List every item, sorted by id
pub fn list_items(catalog: &Catalog) -> ListItemsResponse {
    let items: Vec<ItemDetail> = catalog.items().into_iter().map(ItemDetail::from).collect();
    let total = items.len();
    ListItemsResponse { items, total }
}
