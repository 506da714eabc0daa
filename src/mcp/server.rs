//! Pricebook MCP Server Implementation
//!
//! Exposes the dispatcher and catalog lookups as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::config::CatalogSource;
use crate::dispatch::Dispatcher;
use crate::pricing::{ActionEnvelope, PricingEngine};
use crate::tools::catalog as catalog_tools;
use crate::tools::pricing as pricing_tools;
use crate::tools::status::StatusTracker;

/// Pricebook MCP Service
#[derive(Clone)]
pub struct PricebookService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    dispatcher: Dispatcher,
    tool_router: ToolRouter<PricebookService>,
}

impl PricebookService {
    pub fn new(catalog_source: CatalogSource, catalog: Catalog) -> Self {
        let tracker = StatusTracker::new(catalog_source, catalog.len());
        Self {
            status_tracker: Arc::new(Mutex::new(tracker)),
            dispatcher: Dispatcher::new(PricingEngine::new(Arc::new(catalog))),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProcessParams {
    /// "calculate" or "query"; any other action returns null
    pub action: String,
    /// Payload: "id,quantity,unit;..." for calculate, "id,id,..." for query
    pub datas: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateParams {
    /// Basket entries "id,quantity,unit" separated by ';' (unit is kg or g)
    pub datas: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QueryParams {
    /// Comma-separated item ids
    pub datas: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetItemParams {
    /// Item ID
    pub id: i64,
}

#[derive(Debug, Serialize)]
struct ItemNotFoundResponse {
    error: &'static str,
    id: i64,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PricebookService {
    // --- Status ---

    #[tool(description = "Get the current status of the Pricebook service including build info, catalog size and process information")]
    async fn pricebook_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for the payload formats, units and rounding rules. Call this before building calculate or query payloads.")]
    fn pricing_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PRICING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PRICING_INSTRUCTIONS)]))
    }

    // --- Pricing ---

    #[tool(description = "Run a tagged request {action, datas}. action is \"calculate\" or \"query\"; unrecognized actions return a null result.")]
    fn process(&self, Parameters(p): Parameters<ProcessParams>) -> Result<CallToolResult, McpError> {
        let envelope = ActionEnvelope::new(p.action, p.datas);
        let result = pricing_tools::process(&self.dispatcher, envelope)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Total a basket of \"id,quantity,unit\" entries separated by ';'. The total is rounded to a multiple of 0.05.")]
    fn calculate(&self, Parameters(p): Parameters<CalculateParams>) -> Result<CallToolResult, McpError> {
        let result = pricing_tools::calculate(&self.dispatcher, &p.datas)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get per-kilogram prices for a comma-separated list of item ids, in request order")]
    fn query(&self, Parameters(p): Parameters<QueryParams>) -> Result<CallToolResult, McpError> {
        let result = pricing_tools::query(&self.dispatcher, &p.datas)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Catalog ---

    #[tool(description = "Get a catalog item by ID, including its per-kilogram price")]
    fn get_item(&self, Parameters(p): Parameters<GetItemParams>) -> Result<CallToolResult, McpError> {
        // Missing ids are reported in the payload, not as a tool error
        match catalog_tools::get_item(self.dispatcher.engine().catalog(), p.id) {
            Some(item) => to_json(&item),
            None => to_json(&ItemNotFoundResponse { error: "Item not found", id: p.id }),
        }
    }

    #[tool(description = "List every catalog item sorted by ID")]
    fn list_items(&self) -> Result<CallToolResult, McpError> {
        to_json(&catalog_tools::list_items(self.dispatcher.engine().catalog()))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for PricebookService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pricebook".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Pricebook".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Pricebook - basket totals for goods sold by weight (kg or g). \
                 Call pricing_instructions for payload formats and rounding rules. \
                 Pricing: process (tagged {action, datas}), calculate, query. \
                 Catalog: get_item, list_items. Status: pricebook_status."
                    .into(),
            ),
        }
    }
}
