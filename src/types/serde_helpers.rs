//! Custom serde helpers for Buda's quirky serialization formats.
//!
//! Buda renders several numeric fields as JSON strings and omits some values
//! as empty strings or nulls. These helpers adapt those wire formats.

use serde::{Deserialize, Deserializer, de};

/// Deserialize an optional epoch-milliseconds timestamp.
///
/// Buda's trade listings carry millisecond timestamps as JSON strings
/// (`"1528768062310"`), older payloads use bare numbers, and absent windows
/// are `null`. This helper accepts all three.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use buda_api_client::types::serde_helpers::optional_millis;
///
/// #[derive(Deserialize)]
/// struct Page {
///     #[serde(default, with = "optional_millis")]
///     timestamp: Option<i64>,
/// }
///
/// let page: Page = serde_json::from_str(r#"{"timestamp":"1528768062310"}"#).unwrap();
/// assert_eq!(page.timestamp, Some(1528768062310));
///
/// let page: Page = serde_json::from_str(r#"{"timestamp":null}"#).unwrap();
/// assert_eq!(page.timestamp, None);
/// ```
pub mod optional_millis {
    use super::*;

    /// Deserialize a millisecond timestamp from a string, number, or null.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) => s.parse().map(Some).map_err(de::Error::custom),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| de::Error::custom("timestamp out of i64 range")),
            other => Err(de::Error::custom(format!(
                "expected string or number timestamp, got {other}"
            ))),
        }
    }
}

/// Deserialize an optional string, mapping `""` and `null` to `None`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use buda_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize)]
/// struct Data {
///     #[serde(default, deserialize_with = "empty_string_as_none")]
///     memo: Option<String>,
/// }
///
/// let data: Data = serde_json::from_str(r#"{"memo":""}"#).unwrap();
/// assert!(data.memo.is_none());
/// ```
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
