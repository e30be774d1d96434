//! Identifiers assigned by the external store
//!
//! The store hands out ids as JSON numbers or strings depending on its
//! version. They are kept verbatim so records round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{}", n),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

impl ResourceId {
    /// Read an id from a URL segment
    ///
    /// Only segments that print back unchanged become numbers, so `0042`
    /// stays text and still addresses the same record.
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<u64>() {
            Ok(n) if n.to_string() == segment => ResourceId::Number(n),
            _ => ResourceId::Text(segment.to_string()),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(value: u64) -> Self {
        ResourceId::Number(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        ResourceId::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        ResourceId::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_json_shape() {
        let numeric: ResourceId = serde_json::from_str("12").expect("numeric id");
        let text: ResourceId = serde_json::from_str("\"a1b2\"").expect("text id");

        assert_eq!(numeric, ResourceId::Number(12));
        assert_eq!(text, ResourceId::Text("a1b2".to_string()));
        assert_eq!(serde_json::to_string(&numeric).expect("encode"), "12");
        assert_eq!(serde_json::to_string(&text).expect("encode"), "\"a1b2\"");
    }

    #[test]
    fn test_display_is_bare() {
        assert_eq!(ResourceId::from(3).to_string(), "3");
        assert_eq!(ResourceId::from("x9").to_string(), "x9");
    }

    #[test]
    fn test_parse_segment() {
        assert_eq!(ResourceId::parse("42"), ResourceId::Number(42));
        assert_eq!(ResourceId::parse("4f2a"), ResourceId::from("4f2a"));
        assert_eq!(ResourceId::parse("+7"), ResourceId::from("+7"));
    }

    #[test]
    fn test_parse_keeps_leading_zeros() {
        let id = ResourceId::parse("0042");
        assert_eq!(id, ResourceId::from("0042"));
        assert_eq!(id.to_string(), "0042");
        assert_ne!(id, ResourceId::parse("42"));
    }
}
