//! Request payload parsing
//!
//! Calculate payloads look like `"1,1,kg;3,150,g"` (`id,quantity,unit` entries
//! separated by `;`). Query payloads are a comma-separated id list: `"1,2,3"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};
use crate::models::Unit;

/// A tagged request: which action to run and its string-encoded payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    pub action: String,
    pub datas: String,
}

impl ActionEnvelope {
    pub fn new(action: impl Into<String>, datas: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            datas: datas.into(),
        }
    }
}

/// Actions the engine knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Calculate,
    Query,
}

impl Action {
    /// Recognize an action name. Anything else is not an error, just `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "calculate" => Some(Action::Calculate),
            "query" => Some(Action::Query),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Calculate => "calculate",
            Action::Query => "query",
        }
    }
}

/// One basket line: how much of which item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEntry {
    pub item_id: i64,
    pub quantity: f64,
    /// Unit the quantity is measured in
    pub unit: Unit,
}

impl fmt::Display for LineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.item_id, self.quantity, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationRequest {
    pub entries: Vec<LineEntry>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryRequest {
    pub item_ids: Vec<i64>,
}

impl CalculationRequest {
    pub fn parse(datas: &str) -> PricingResult<Self> {
        let entries = datas
            .split(';')
            .map(parse_line_entry)
            .collect::<PricingResult<Vec<_>>>()?;
        Ok(Self { entries })
    }
}

impl QueryRequest {
    pub fn parse(datas: &str) -> PricingResult<Self> {
        let item_ids = datas
            .split(',')
            .map(|field| parse_item_id(field, field))
            .collect::<PricingResult<Vec<_>>>()?;
        Ok(Self { item_ids })
    }
}

fn parse_line_entry(entry: &str) -> PricingResult<LineEntry> {
    let fields: Vec<&str> = entry.split(',').collect();
    let [id, quantity, unit] = fields.as_slice() else {
        return Err(PricingError::malformed(
            entry,
            format!("expected 3 fields (id,quantity,unit), found {}", fields.len()),
        ));
    };

    let item_id = parse_item_id(entry, id)?;

    // Any finite decimal, including exponents and negatives
    let quantity = quantity.trim();
    let quantity: f64 = quantity
        .parse()
        .map_err(|_| PricingError::malformed(entry, format!("invalid quantity '{}'", quantity)))?;
    if !quantity.is_finite() {
        return Err(PricingError::malformed(entry, "quantity must be finite"));
    }

    // Unit tokens are exact: "kg" or "g"
    let unit = unit.trim();
    let unit = Unit::from_str(unit)
        .ok_or_else(|| PricingError::malformed(entry, format!("unknown unit '{}'", unit)))?;

    Ok(LineEntry {
        item_id,
        quantity,
        unit,
    })
}

fn parse_item_id(entry: &str, field: &str) -> PricingResult<i64> {
    let field = field.trim();
    if field.is_empty() {
        return Err(PricingError::malformed(entry, "missing item id"));
    }
    field
        .parse()
        .map_err(|_| PricingError::malformed(entry, format!("invalid item id '{}'", field)))
}
