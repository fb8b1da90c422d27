//! Tolerant field decoders for crawler payloads.
//!
//! The crawler scrapes third-party pages and its numeric fields arrive as
//! numbers, numeric strings ("1,234", "12.5%"), empty strings or null.
//! These decoders turn anything unusable into `None` instead of failing the
//! whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode an optional float from a number, numeric string, or null.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Decode an optional integer, truncating fractional input.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).map(|v| v.trunc() as i64))
}

/// Decode a string that may have been sent as a number.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_string).unwrap_or_default())
}

/// Decode an optional string; blank strings become `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .map(value_to_string)
        .filter(|s| !s.trim().is_empty()))
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .trim_end_matches('%')
                .chars()
                .filter(|c| *c != ',')
                .collect();
            cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_f64")]
        value: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_i64")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "super::string")]
        id: String,
        #[serde(default, deserialize_with = "super::opt_string")]
        note: Option<String>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Probe =
            serde_json::from_str(r#"{"value": "1,234.5", "count": 12.9, "id": 42}"#).unwrap();
        assert_eq!(p.value, Some(1234.5));
        assert_eq!(p.count, Some(12));
        assert_eq!(p.id, "42");
        assert_eq!(p.note, None);
    }

    #[test]
    fn garbage_becomes_none() {
        let p: Probe =
            serde_json::from_str(r#"{"value": "N/A", "count": null, "note": "  "}"#).unwrap();
        assert_eq!(p.value, None);
        assert_eq!(p.count, None);
        assert_eq!(p.note, None);
        assert_eq!(p.id, "");
    }

    #[test]
    fn percent_suffix_is_stripped() {
        let p: Probe = serde_json::from_str(r#"{"value": "-2.35%"}"#).unwrap();
        assert_eq!(p.value, Some(-2.35));
    }
}
