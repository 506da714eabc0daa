//! Pricebook status tool
//!
//! Runtime status information and usage instructions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::CatalogSource;

/// Request format instructions for AI assistants
pub const PRICING_INSTRUCTIONS: &str = r#"
# Pricebook Instructions

## Units

Only two units exist: `kg` and `g` (lowercase, exact). Every item in the
catalog is priced per one kg or per one g. All arithmetic happens in kilograms:

- quantities in `g` are divided by 1000
- prices per `g` are multiplied by 1000

## Calculating a basket total

Tool: `calculate` (or `process` with `action: "calculate"`)

`datas` is a list of `id,quantity,unit` entries separated by `;`:

    1,1,kg;2,2,kg;3,0.15,kg;4,4,kg

The quantity unit may differ from the unit the item is priced in.

## Rounding

Totals snap to a multiple of 0.05 by their last cent digit:

| last cent digit | result                  |
|-----------------|-------------------------|
| 0 or 5          | unchanged               |
| 1 or 2          | down to the 10 cents    |
| 3, 4, 6 or 7    | to the 5 in between     |
| 8 or 9          | up to the next 10 cents |

So 805.64 becomes 805.65 and 12.31 becomes 12.30.

## Looking up prices

Tool: `query` (or `process` with `action: "query"`)

`datas` is a comma-separated list of item ids: `1,2,3,4`. Each id yields
`{"itemId", "kgPrice"}` in request order, duplicates included.

## Errors

- Unknown item id -> error naming the id
- Wrong field count, bad number or unit -> error naming the entry
- `process` with any other action returns `null`, not an error
"#;

/// Runtime status of the Pricebook service
#[derive(Debug, Clone, Serialize)]
pub struct PricebookStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub catalog_source: String,
    pub catalog_items: usize,

    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Collects runtime information for the status tool
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    catalog_source: CatalogSource,
    catalog_items: usize,
}

impl StatusTracker {
    pub fn new(catalog_source: CatalogSource, catalog_items: usize) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            catalog_source,
            catalog_items,
        }
    }

    pub fn get_status(&self) -> PricebookStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        PricebookStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_source: self.catalog_source.to_string(),
            catalog_items: self.catalog_items,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
