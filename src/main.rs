//! Pricebook
//!
//! An MCP server for pricing baskets of weighed goods.

use pricebook::mcp::PricebookService;
use pricebook::{build_info, config};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP stdio protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pricebook=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Load the catalog once; it is read-only from here on
    let (source, catalog) = config::load()?;
    eprintln!("Catalog: {} ({} items)", source, catalog.len());

    // Create the Pricebook service
    let service = PricebookService::new(source, catalog);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server and wait for it to complete
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
