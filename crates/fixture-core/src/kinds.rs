//! The kind catalogue for the fixture-fill randomizer.
//!
//! This module defines [`FieldKind`], the closed universe of data kinds the
//! randomizer knows about. Each kind is one variant; dispatch over kinds is
//! an exhaustive `match`, so adding a variant forces every consumer to
//! decide what to do with it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// One recognized data kind.
///
/// `FieldKind` is the type descriptor callers hand to the randomizer.
/// Equality is structural and kind-preserving: there is exactly one variant
/// per kind, so two descriptors compare equal iff they name the same kind
/// (for enumerations, the same variant list).
///
/// Most kinds have a generation rule. `Bytes`, `Json`, `Array` and
/// enumerations with no variants do not; requesting them produces the
/// unsupported sentinel rather than an error.
///
/// # YAML Format
///
/// Simple kinds can be specified as strings:
/// ```yaml
/// type: text
/// type: int
/// type: zoned_date_time
/// ```
///
/// Parametric kinds use object format:
/// ```yaml
/// type:
///   type: enum
///   variants: [red, green, blue]
/// type:
///   type: array
///   element_type: int
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    // Textual
    /// UTF-8 text
    Text,

    /// Single character
    Char,

    // Boolean
    /// Boolean value
    Bool,

    // Integer types (sized)
    /// 8-bit signed integer
    Int8,

    /// 16-bit signed integer
    Int16,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    // Floating point
    /// 32-bit IEEE 754 floating point
    Float32,

    /// 64-bit IEEE 754 floating point
    Float64,

    // Unbounded numerics
    /// Arbitrary-precision integer
    BigInteger,

    /// Arbitrary-precision decimal
    Decimal,

    // Atomic counters
    /// Atomically-updatable 32-bit counter
    AtomicInt32,

    /// Atomically-updatable 64-bit counter
    AtomicInt64,

    // Temporal types
    /// Generic instant (UTC)
    DateTime,

    /// Calendar date only (SQL DATE)
    Date,

    /// Time-of-day (SQL TIME)
    ///
    /// Produced values are a raw millisecond draw and may lie far outside
    /// any sane clock range.
    Time,

    /// Timestamp (SQL TIMESTAMP)
    Timestamp,

    /// Locale-aware calendar instant
    ///
    /// Produced values are always the current moment, never a draw from
    /// the date window.
    Calendar,

    /// Instant with timezone offset
    ZonedDateTime,

    /// Date without zone
    LocalDate,

    /// Time without zone
    LocalTime,

    /// Date and time without zone
    LocalDateTime,

    /// Time duration
    Duration,

    /// Calendar period
    Period,

    /// Interval between two instants
    Interval,

    // Enumeration
    /// Named enumeration with an ordered variant list
    Enum {
        /// Declared variants, in order
        variants: Vec<String>,
    },

    // Kinds without a generation rule
    /// Binary data
    Bytes,

    /// JSON document
    Json,

    /// Array of a specific kind
    Array {
        /// Element kind
        element_kind: Box<FieldKind>,
    },
}

impl FieldKind {
    /// Create a new enumeration kind with the given variants.
    pub fn enumeration(variants: Vec<String>) -> Self {
        Self::Enum { variants }
    }

    /// Create a new array kind with the given element kind.
    pub fn array(element_kind: FieldKind) -> Self {
        Self::Array {
            element_kind: Box::new(element_kind),
        }
    }

    /// Check if this kind has a generation rule.
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Bytes | Self::Json | Self::Array { .. } => false,
            Self::Enum { variants } => !variants.is_empty(),
            _ => true,
        }
    }

    /// Check if this kind represents a numeric kind.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Float32
                | Self::Float64
                | Self::BigInteger
                | Self::Decimal
                | Self::AtomicInt32
                | Self::AtomicInt64
        )
    }

    /// Check if this kind represents a textual kind.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text | Self::Char)
    }

    /// Check if this kind represents a temporal kind.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::DateTime
                | Self::Date
                | Self::Time
                | Self::Timestamp
                | Self::Calendar
                | Self::ZonedDateTime
                | Self::LocalDate
                | Self::LocalTime
                | Self::LocalDateTime
                | Self::Duration
                | Self::Period
                | Self::Interval
        )
    }
}

// Custom serialization/deserialization for FieldKind
// Supports both simple string format ("text", "int") and object format
// ({"type": "enum", "variants": [...]})

impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            // Simple kinds - serialize as string
            Self::Text => serializer.serialize_str("text"),
            Self::Char => serializer.serialize_str("char"),
            Self::Bool => serializer.serialize_str("bool"),
            Self::Int8 => serializer.serialize_str("tiny_int"),
            Self::Int16 => serializer.serialize_str("small_int"),
            Self::Int32 => serializer.serialize_str("int"),
            Self::Int64 => serializer.serialize_str("big_int"),
            Self::Float32 => serializer.serialize_str("float"),
            Self::Float64 => serializer.serialize_str("double"),
            Self::BigInteger => serializer.serialize_str("big_integer"),
            Self::Decimal => serializer.serialize_str("decimal"),
            Self::AtomicInt32 => serializer.serialize_str("atomic_int"),
            Self::AtomicInt64 => serializer.serialize_str("atomic_big_int"),
            Self::DateTime => serializer.serialize_str("date_time"),
            Self::Date => serializer.serialize_str("date"),
            Self::Time => serializer.serialize_str("time"),
            Self::Timestamp => serializer.serialize_str("timestamp"),
            Self::Calendar => serializer.serialize_str("calendar"),
            Self::ZonedDateTime => serializer.serialize_str("zoned_date_time"),
            Self::LocalDate => serializer.serialize_str("local_date"),
            Self::LocalTime => serializer.serialize_str("local_time"),
            Self::LocalDateTime => serializer.serialize_str("local_date_time"),
            Self::Duration => serializer.serialize_str("duration"),
            Self::Period => serializer.serialize_str("period"),
            Self::Interval => serializer.serialize_str("interval"),
            Self::Bytes => serializer.serialize_str("bytes"),
            Self::Json => serializer.serialize_str("json"),

            // Parametric kinds - serialize as map
            Self::Enum { variants } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "enum")?;
                map.serialize_entry("variants", variants)?;
                map.end()
            }
            Self::Array { element_kind } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("element_type", element_kind)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct FieldKindVisitor;

        fn simple_kind(name: &str) -> Option<FieldKind> {
            match name {
                "text" => Some(FieldKind::Text),
                "char" => Some(FieldKind::Char),
                "bool" => Some(FieldKind::Bool),
                "tiny_int" | "tinyint" => Some(FieldKind::Int8),
                "small_int" | "smallint" => Some(FieldKind::Int16),
                "int" => Some(FieldKind::Int32),
                "big_int" | "bigint" => Some(FieldKind::Int64),
                "float" => Some(FieldKind::Float32),
                "double" => Some(FieldKind::Float64),
                "big_integer" => Some(FieldKind::BigInteger),
                "decimal" => Some(FieldKind::Decimal),
                "atomic_int" => Some(FieldKind::AtomicInt32),
                "atomic_big_int" => Some(FieldKind::AtomicInt64),
                "date_time" | "datetime" => Some(FieldKind::DateTime),
                "date" => Some(FieldKind::Date),
                "time" => Some(FieldKind::Time),
                "timestamp" => Some(FieldKind::Timestamp),
                "calendar" => Some(FieldKind::Calendar),
                "zoned_date_time" => Some(FieldKind::ZonedDateTime),
                "local_date" => Some(FieldKind::LocalDate),
                "local_time" => Some(FieldKind::LocalTime),
                "local_date_time" => Some(FieldKind::LocalDateTime),
                "duration" => Some(FieldKind::Duration),
                "period" => Some(FieldKind::Period),
                "interval" => Some(FieldKind::Interval),
                "bytes" => Some(FieldKind::Bytes),
                "json" => Some(FieldKind::Json),
                _ => None,
            }
        }

        impl<'de> Visitor<'de> for FieldKindVisitor {
            type Value = FieldKind;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or map representing a FieldKind")
            }

            // Handle string format: "text", "int", etc.
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                simple_kind(value)
                    .ok_or_else(|| E::custom(format!("unknown simple kind: {value}")))
            }

            // Handle map format: {"type": "enum", "variants": [...]}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut kind_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        kind_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let kind_name = kind_name.ok_or_else(|| M::Error::missing_field("type"))?;

                if let Some(kind) = simple_kind(&kind_name) {
                    return Ok(kind);
                }

                match kind_name.as_str() {
                    "enum" => {
                        let variants = get_field_required(&fields, "variants")?;
                        Ok(FieldKind::Enum { variants })
                    }
                    "array" => {
                        let element_kind: FieldKind =
                            get_field_required(&fields, "element_type")?;
                        Ok(FieldKind::Array {
                            element_kind: Box::new(element_kind),
                        })
                    }
                    _ => Err(M::Error::custom(format!("unknown kind: {kind_name}"))),
                }
            }
        }

        deserializer.deserialize_any(FieldKindVisitor)
    }
}

// Helper for deserialization
fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            FieldKind::enumeration(vec!["a".to_string(), "b".to_string()]),
            FieldKind::Enum {
                variants: vec!["a".to_string(), "b".to_string()]
            }
        );
        assert_eq!(
            FieldKind::array(FieldKind::Int32),
            FieldKind::Array {
                element_kind: Box::new(FieldKind::Int32)
            }
        );
    }

    #[test]
    fn test_kind_categories() {
        assert!(FieldKind::Int32.is_numeric());
        assert!(FieldKind::BigInteger.is_numeric());
        assert!(FieldKind::AtomicInt64.is_numeric());
        assert!(!FieldKind::Text.is_numeric());

        assert!(FieldKind::Text.is_textual());
        assert!(FieldKind::Char.is_textual());
        assert!(!FieldKind::Bool.is_textual());

        assert!(FieldKind::DateTime.is_temporal());
        assert!(FieldKind::Interval.is_temporal());
        assert!(!FieldKind::Int32.is_temporal());
    }

    #[test]
    fn test_supported_kinds() {
        assert!(FieldKind::Text.is_supported());
        assert!(FieldKind::enumeration(vec!["a".to_string()]).is_supported());

        assert!(!FieldKind::Bytes.is_supported());
        assert!(!FieldKind::Json.is_supported());
        assert!(!FieldKind::array(FieldKind::Text).is_supported());
        assert!(!FieldKind::enumeration(vec![]).is_supported());
    }

    #[test]
    fn test_deserialize_simple_string() {
        let parsed: FieldKind = serde_yaml::from_str("text").unwrap();
        assert_eq!(parsed, FieldKind::Text);

        let parsed: FieldKind = serde_yaml::from_str("int").unwrap();
        assert_eq!(parsed, FieldKind::Int32);

        let parsed: FieldKind = serde_yaml::from_str("zoned_date_time").unwrap();
        assert_eq!(parsed, FieldKind::ZonedDateTime);

        let parsed: FieldKind = serde_yaml::from_str("bigint").unwrap();
        assert_eq!(parsed, FieldKind::Int64);
    }

    #[test]
    fn test_deserialize_parametric_kinds() {
        let yaml = r#"
type: enum
variants: [red, green, blue]
"#;
        let parsed: FieldKind = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            parsed,
            FieldKind::enumeration(vec![
                "red".to_string(),
                "green".to_string(),
                "blue".to_string()
            ])
        );

        let yaml = r#"
type: array
element_type: int
"#;
        let parsed: FieldKind = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, FieldKind::array(FieldKind::Int32));
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        let result: Result<FieldKind, _> = serde_yaml::from_str("quaternion");
        assert!(result.is_err());

        let result: Result<FieldKind, _> = serde_yaml::from_str("{type: enum}");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let kinds = vec![
            FieldKind::Text,
            FieldKind::Char,
            FieldKind::Int8,
            FieldKind::Float64,
            FieldKind::BigInteger,
            FieldKind::AtomicInt64,
            FieldKind::Calendar,
            FieldKind::LocalDateTime,
            FieldKind::Interval,
            FieldKind::enumeration(vec!["a".to_string(), "b".to_string()]),
            FieldKind::array(FieldKind::Int32),
        ];

        for kind in kinds {
            let yaml = serde_yaml::to_string(&kind).unwrap();
            let parsed: FieldKind = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_json_form_also_accepted() {
        let parsed: FieldKind = serde_json::from_str("\"date_time\"").unwrap();
        assert_eq!(parsed, FieldKind::DateTime);

        let parsed: FieldKind =
            serde_json::from_str(r#"{"type": "enum", "variants": ["x"]}"#).unwrap();
        assert_eq!(parsed, FieldKind::enumeration(vec!["x".to_string()]));
    }
}
