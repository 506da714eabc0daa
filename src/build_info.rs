//! Build information
//!
//! `build.rs` stamps every compile with a build number and UTC timestamp.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version and build stamp of the running binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_stamp(
            option_env!("PRICEBOOK_BUILD_NUMBER"),
            option_env!("PRICEBOOK_BUILD_TIMESTAMP"),
        )
    }

    /// Missing or garbled stamps fall back to build 0 / "unknown"
    fn from_stamp(number: Option<&str>, timestamp: Option<&'static str>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.unwrap_or("unknown"),
        }
    }

    pub fn banner(&self) -> String {
        let rule = "=".repeat(47);
        format!(
            "{rule}\n  Pricebook v{} (build #{})\n  Compiled: {}\n{rule}",
            self.version, self.build_number, self.build_timestamp
        )
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr (stdout belongs to the MCP transport)
pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current().banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stamp() {
        let info = BuildInfo::from_stamp(Some("42"), Some("2026-10-19T08:00:00Z"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.build_timestamp, "2026-10-19T08:00:00Z");
        assert_eq!(info.name, "pricebook");
    }

    #[test]
    fn test_from_stamp_fallbacks() {
        let info = BuildInfo::from_stamp(Some("4x2"), None);
        assert_eq!(info.build_number, 0);
        assert_eq!(info.build_timestamp, "unknown");

        assert_eq!(BuildInfo::from_stamp(None, None).build_number, 0);
    }

    #[test]
    fn test_banner() {
        let banner = BuildInfo::from_stamp(Some("7"), Some("now")).banner();
        assert!(banner.contains(&format!("Pricebook v{} (build #7)", VERSION)));
        assert!(banner.contains("Compiled: now"));
        assert_eq!(banner.lines().count(), 4);
    }
}
