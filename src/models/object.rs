//! Building blocks shared by every CMS object: media, relations, timestamps,
//! and the tolerant field readers used by the entity models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub imgix_url: String,
}

impl Media {
    /// Cropped, auto-formatted rendition at the given size.
    pub fn thumbnail(&self, width: u32, height: u32) -> Option<String> {
        let base = if self.imgix_url.is_empty() {
            &self.url
        } else {
            &self.imgix_url
        };
        if base.is_empty() {
            return None;
        }
        Some(format!(
            "{base}?w={width}&h={height}&fit=crop&auto=format,compress"
        ))
    }
}

/// Reference to another object.
///
/// Depth-expanded fetches inline the referenced object; shallow fetches leave
/// its id. Anything else is kept as-is and treated as having no nested fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Expanded(Box<T>),
    Id(String),
    Unresolved(Value),
}

impl<T> Relation<T> {
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Self::Expanded(inner) => Some(inner),
            Self::Id(_) | Self::Unresolved(_) => None,
        }
    }
}

/// Parse a CMS timestamp. Accepts RFC 3339, zone-less date-times (read as
/// UTC) and bare dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// -- Tolerant field readers --

/// Treat an explicit `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read any value as `T`, falling back to `None` when the shape is wrong.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Read a decimal field that may arrive as a string or a bare number.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Read a real number that may arrive as a number or a numeric string.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .filter(|f| f.is_finite()))
}

/// Read a list of strings, dropping entries that are not strings.
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
