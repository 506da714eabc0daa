//! Item catalog
//!
//! Keyed by item id. Filled once at startup, read-only while serving requests.

use std::collections::HashMap;

use crate::models::Item;

/// In-memory catalog of items keyed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<i64, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, replacing any item already stored under the same id
    pub fn add(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    /// Add items in order; later duplicates win
    pub fn bulk_add<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Item>,
    {
        for item in items {
            self.add(item);
        }
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, sorted by id
    pub fn items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by_key(|item| item.id);
        items
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.bulk_add(iter);
        catalog
    }
}
