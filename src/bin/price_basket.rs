//! One-shot pricing from the command line
//!
//! Usage: price_basket <action> <datas>
//!
//! price_basket calculate "1,1,kg;2,2,kg;3,0.15,kg;4,4,kg"
//! price_basket query "1,2,3,4"

use std::process::ExitCode;
use std::sync::Arc;

use pricebook::config;
use pricebook::dispatch::Dispatcher;
use pricebook::pricing::{ActionEnvelope, PricingEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pricebook=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [action, datas] = args.as_slice() else {
        eprintln!("Usage: price_basket <action> <datas>");
        eprintln!("  action: calculate | query");
        eprintln!("  datas:  \"id,quantity,unit;...\" or \"id,id,...\"");
        return Ok(ExitCode::from(2));
    };

    // Same catalog resolution as the MCP server
    let (_, catalog) = config::load()?;
    let dispatcher = Dispatcher::new(PricingEngine::new(Arc::new(catalog)));

    // Unknown actions print `null`
    let result = dispatcher.dispatch(&ActionEnvelope::new(action.as_str(), datas.as_str()))?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(ExitCode::SUCCESS)
}
