use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::PointId;

/// Identifier as it appears in upstream and topology documents
///
/// The documents are inconsistent about encoding identifiers as JSON strings
/// or numbers. Anything that parses as an integer is `Numeric`; everything
/// else keeps the raw string unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawId {
    Numeric(i64),
    Text(String),
}

impl RawId {
    /// Normalize a string identifier
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(value) => RawId::Numeric(value),
            Err(_) => RawId::Text(raw.to_string()),
        }
    }

    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            RawId::Numeric(value) => Some(*value),
            RawId::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_numeric().is_some()
    }

    /// Identifier held in a pass-through JSON value; `null` and `""` are absent
    pub fn from_value(value: &Value) -> Option<Self> {
        match RawId::deserialize(value).ok()? {
            RawId::Text(text) if text.is_empty() => None,
            id => Some(id),
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Numeric(value) => write!(f, "{}", value),
            RawId::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for RawId {
    fn from(raw: &str) -> Self {
        RawId::parse(raw)
    }
}

impl From<i64> for RawId {
    fn from(value: i64) -> Self {
        RawId::Numeric(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<WireId> for RawId {
    fn from(wire: WireId) -> Self {
        match wire {
            WireId::Integer(value) => RawId::Numeric(value),
            // Whole floats within the exactly-representable range are integers
            WireId::Float(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => {
                RawId::Numeric(value as i64)
            }
            WireId::Float(value) => RawId::Text(value.to_string()),
            WireId::Text(text) => RawId::parse(&text),
        }
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        WireId::deserialize(deserializer).map(RawId::from)
    }
}

impl Serialize for RawId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawId::Numeric(value) => serializer.serialize_i64(*value),
            RawId::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Deserialize a required point id from either `12` or `"12"`
pub fn deserialize_point_id<'de, D>(deserializer: D) -> Result<PointId, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Numeric(value) => Ok(value),
        RawId::Text(text) => Err(D::Error::custom(format!(
            "expected a numeric point id, got {:?}",
            text
        ))),
    }
}

/// Like [`deserialize_point_id`], but `null` and `""` become `None`
pub fn deserialize_opt_point_id<'de, D>(deserializer: D) -> Result<Option<PointId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Numeric(value)) => Ok(Some(value)),
        Some(RawId::Text(text)) if text.is_empty() => Ok(None),
        Some(RawId::Text(text)) => Err(D::Error::custom(format!(
            "expected a numeric point id, got {:?}",
            text
        ))),
    }
}

/// Train numbers are compared as strings, but occasionally arrive as numbers
pub fn deserialize_train_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match WireId::deserialize(deserializer)? {
        WireId::Text(text) => Ok(text),
        other => Ok(RawId::from(other).to_string()),
    }
}

/// Treat a `null` list the same as a missing one
pub fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Point {
        #[serde(deserialize_with = "deserialize_point_id")]
        id: PointId,
        #[serde(default, deserialize_with = "deserialize_opt_point_id")]
        next: Option<PointId>,
    }

    #[test]
    fn test_string_and_number_normalize_to_same_id() {
        let from_number: RawId = serde_json::from_value(json!(4500)).unwrap();
        let from_string: RawId = serde_json::from_value(json!("4500")).unwrap();

        assert_eq!(from_number, RawId::Numeric(4500));
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_non_numeric_text_is_kept_verbatim() {
        let id: RawId = serde_json::from_value(json!("Wlk12")).unwrap();
        assert_eq!(id, RawId::Text("Wlk12".to_string()));
        assert_eq!(id.to_string(), "Wlk12");
        assert!(!id.is_numeric());
    }

    #[test]
    fn test_whole_float_is_numeric() {
        let id: RawId = serde_json::from_value(json!(12.0)).unwrap();
        assert_eq!(id, RawId::Numeric(12));

        let fractional: RawId = serde_json::from_value(json!(12.5)).unwrap();
        assert_eq!(fractional, RawId::Text("12.5".to_string()));
    }

    #[test]
    fn test_serializes_back_to_original_kind() {
        assert_eq!(serde_json::to_value(RawId::Numeric(3)).unwrap(), json!(3));
        assert_eq!(
            serde_json::to_value(RawId::Text("B1".to_string())).unwrap(),
            json!("B1")
        );
    }

    #[test]
    fn test_from_value_skips_empty_and_null() {
        assert_eq!(RawId::from_value(&json!("12")), Some(RawId::Numeric(12)));
        assert_eq!(
            RawId::from_value(&json!("KO")),
            Some(RawId::Text("KO".to_string()))
        );
        assert_eq!(RawId::from_value(&json!("")), None);
        assert_eq!(RawId::from_value(&json!(null)), None);
        assert_eq!(RawId::from_value(&json!([1])), None);
    }

    #[test]
    fn test_point_id_rejects_text() {
        let ok: Point = serde_json::from_value(json!({"id": "17", "next": 18})).unwrap();
        assert_eq!(ok.id, 17);
        assert_eq!(ok.next, Some(18));

        let err = serde_json::from_value::<Point>(json!({"id": "north"})).unwrap_err();
        assert!(err.to_string().contains("numeric point id"));
    }

    #[test]
    fn test_optional_point_id_accepts_null_and_empty() {
        let null: Point = serde_json::from_value(json!({"id": 1, "next": null})).unwrap();
        let empty: Point = serde_json::from_value(json!({"id": 1, "next": ""})).unwrap();
        let missing: Point = serde_json::from_value(json!({"id": 1})).unwrap();

        assert_eq!(null.next, None);
        assert_eq!(empty.next, None);
        assert_eq!(missing.next, None);
    }

    #[test]
    fn test_train_number_keeps_string_form() {
        #[derive(Deserialize)]
        struct Train {
            #[serde(deserialize_with = "deserialize_train_number")]
            number: String,
        }

        let text: Train = serde_json::from_value(json!({"number": "04131"})).unwrap();
        let number: Train = serde_json::from_value(json!({"number": 14131})).unwrap();

        assert_eq!(text.number, "04131");
        assert_eq!(number.number, "14131");
    }
}
