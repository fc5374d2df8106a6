//! Key-value store port - persistence abstraction
//!
//! The original application persists every collection in browser local
//! storage. This trait is the explicit stand-in: string keys to string
//! values, plus an availability check. A store may be unavailable (the
//! localStorage-outside-a-browser case); callers are expected to degrade
//! reads to defaults and mutations to no-ops rather than fail.

use crate::domain::result::Result;

/// Persistent string key-value store abstraction
///
/// `get` returns `None` both for missing keys and for keys that cannot be
/// read; absence and unreadability are deliberately indistinguishable.
pub trait KeyValueStore: Send + Sync {
    /// Whether the store can currently be read and written
    fn is_available(&self) -> bool;

    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if any
    fn remove(&self, key: &str) -> Result<()>;
}

/// Parse a stored JSON document, mapping absent or malformed content to the
/// given default
///
/// Malformed content is never surfaced as an error; it is treated exactly
/// like an empty slot.
pub fn parse_or_default<T: serde::de::DeserializeOwned>(raw: Option<String>, fallback: T) -> T {
    match raw {
        Some(raw) => serde_json::from_str(&raw).unwrap_or(fallback),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_on_missing_value() {
        let parsed: Vec<String> = parse_or_default(None, Vec::new());
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_or_default_on_malformed_value() {
        let parsed: Vec<String> = parse_or_default(Some("{not json".to_string()), Vec::new());
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_or_default_on_valid_value() {
        let parsed: Vec<String> =
            parse_or_default(Some(r#"["a","b"]"#.to_string()), Vec::new());
        assert_eq!(parsed, vec!["a", "b"]);
    }
}
