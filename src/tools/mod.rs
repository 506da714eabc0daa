//! Pricebook tools module
//!
//! MCP tool implementations for pricing and catalog lookups.

pub mod catalog;
pub mod pricing;
pub mod status;
