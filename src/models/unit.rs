//! Measurement unit
//!
//! The two weight units prices and quantities may be expressed in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weight unit for prices and quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Kilograms, the canonical unit all arithmetic is done in
    Kg,
    /// Grams
    G,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::G => "g",
        }
    }

    /// Parse a unit token. Case-sensitive: only "kg" and "g" are accepted.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "kg" => Some(Unit::Kg),
            "g" => Some(Unit::G),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Unit::from_str("kg"), Some(Unit::Kg));
        assert_eq!(Unit::from_str("g"), Some(Unit::G));
        assert_eq!(Unit::from_str("KG"), None);
        assert_eq!(Unit::from_str("lb"), None);
        assert_eq!(Unit::from_str(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Kg).unwrap(), r#""kg""#);
        let unit: Unit = serde_json::from_str(r#""g""#).unwrap();
        assert_eq!(unit, Unit::G);
        assert!(serde_json::from_str::<Unit>(r#""mg""#).is_err());
    }
}
