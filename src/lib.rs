//! Pricebook Library
//!
//! Basket pricing for goods sold by weight: kg/g normalization, 5-cent
//! rounding and the calculate/query dispatcher.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod mcp;
pub mod models;
pub mod pricing;
pub mod tools;
