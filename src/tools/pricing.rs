//! Pricing MCP tools
//!
//! Thin wrappers around the dispatcher that produce serializable responses.

use serde::Serialize;

use crate::dispatch::Dispatcher;
use crate::pricing::{ActionEnvelope, KgPrice, Outcome};

/// Response for process
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub action: String,
    /// `null` when the action is not recognized
    pub result: Option<Outcome>,
}

/// Response for calculate
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub total: f64,
}

/// Response for query
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub prices: Vec<KgPrice>,
}

/// Dispatch an arbitrary envelope
pub fn process(dispatcher: &Dispatcher, envelope: ActionEnvelope) -> Result<ProcessResponse, String> {
    let result = dispatcher.dispatch(&envelope).map_err(|e| {
        tracing::warn!(action = %envelope.action, "rejected payload: {}", e);
        e.to_string()
    })?;

    Ok(ProcessResponse {
        action: envelope.action,
        result,
    })
}

pub fn calculate(dispatcher: &Dispatcher, datas: &str) -> Result<CalculateResponse, String> {
    let total = dispatcher.engine().calculate(datas).map_err(|e| {
        tracing::warn!("rejected calculate payload: {}", e);
        e.to_string()
    })?;

    Ok(CalculateResponse { total })
}

pub fn query(dispatcher: &Dispatcher, datas: &str) -> Result<QueryResponse, String> {
    let prices = dispatcher.engine().query(datas).map_err(|e| {
        tracing::warn!("rejected query payload: {}", e);
        e.to_string()
    })?;

    Ok(QueryResponse { prices })
}
