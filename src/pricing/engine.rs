//! Pricing engine
//!
//! Turns parsed requests into basket totals and per-kilogram price lists.

use std::sync::Arc;

use serde::Serialize;

use super::converter::{normalize_price, normalize_weight, precise_round};
use super::error::{PricingError, PricingResult};
use super::request::{Action, ActionEnvelope, CalculationRequest, QueryRequest};
use crate::catalog::Catalog;
use crate::models::Item;

/// Per-kilogram price of one item, as returned by `query`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KgPrice {
    pub item_id: i64,
    pub kg_price: f64,
}

/// Result of a recognized action
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Rounded basket total
    Total(f64),
    Prices(Vec<KgPrice>),
}

/// Stateless pricing over a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: Arc<Catalog>,
}

impl PricingEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn lookup(&self, id: i64) -> PricingResult<&Item> {
        self.catalog.get(id).ok_or(PricingError::UnknownItem(id))
    }

    /// Total a basket given as `id,quantity,unit;...`
    pub fn calculate(&self, datas: &str) -> PricingResult<f64> {
        let request = CalculationRequest::parse(datas)?;
        self.calculate_request(&request)
    }

    /// Sum kilogram price times kilogram quantity for every line, in order,
    /// then apply [`precise_round`]
    pub fn calculate_request(&self, request: &CalculationRequest) -> PricingResult<f64> {
        let mut sum = 0.0;
        for entry in &request.entries {
            let item = self.lookup(entry.item_id)?;

            // Both sides in kilograms before multiplying
            let kg_quantity = normalize_weight(entry.quantity, entry.unit);
            let kg_price = normalize_price(item.unit_price, item.unit);
            sum += kg_price * kg_quantity;

            // Rounding works on cents, so the total must stay finite once scaled
            if !(sum * 100.0).is_finite() {
                return Err(PricingError::malformed(
                    &entry.to_string(),
                    "basket total is out of range",
                ));
            }
        }
        Ok(precise_round(sum))
    }

    /// Per-kilogram prices for a comma-separated id list
    pub fn query(&self, datas: &str) -> PricingResult<Vec<KgPrice>> {
        let request = QueryRequest::parse(datas)?;
        self.query_request(&request)
    }

    /// One row per requested id, in request order (duplicates included)
    pub fn query_request(&self, request: &QueryRequest) -> PricingResult<Vec<KgPrice>> {
        request
            .item_ids
            .iter()
            .map(|&id| -> PricingResult<KgPrice> {
                let item = self.lookup(id)?;
                Ok(KgPrice {
                    item_id: item.id,
                    kg_price: normalize_price(item.unit_price, item.unit),
                })
            })
            .collect()
    }

    /// Run the action named in the envelope
    ///
    /// Unrecognized actions yield `Ok(None)`.
    pub fn process(&self, envelope: &ActionEnvelope) -> PricingResult<Option<Outcome>> {
        let outcome = match Action::from_str(&envelope.action) {
            Some(Action::Calculate) => Outcome::Total(self.calculate(&envelope.datas)?),
            Some(Action::Query) => Outcome::Prices(self.query(&envelope.datas)?),
            None => return Ok(None),
        };
        Ok(Some(outcome))
    }
}
