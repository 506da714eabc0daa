//! Data models
//!
//! Catalog entities and the units they are priced in.

mod item;
mod unit;

pub use item::Item;
pub use unit::Unit;
