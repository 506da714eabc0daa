//! Pricing module
//!
//! Unit normalization, 5-cent rounding, request parsing and the engine that
//! ties them to the catalog.

pub mod converter;
pub mod engine;
pub mod error;
pub mod request;

pub use converter::{normalize_price, normalize_weight, precise_round, snap_cents};
pub use engine::{KgPrice, Outcome, PricingEngine};
pub use error::{PricingError, PricingResult};
pub use request::{Action, ActionEnvelope, CalculationRequest, LineEntry, QueryRequest};
