//! Data model types for game catalog entries.
//!
//! Entries are kept loosely typed: every field is a [`FieldValue`] so the
//! projector can match on the shape it finds instead of relying on a fixed
//! serde schema that would reject or silently coerce unexpected input.

use std::fmt;

use serde_yml::Value;

// ── Scalar ──────────────────────────────────────────────────────────────────

/// A single YAML scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    /// Canonical text form used in the exported table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{n}"),
            // Debug keeps the decimal point (`1.0`), Display would drop it.
            Scalar::Float(n) => write!(f, "{n:?}"),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
        }
    }
}

// ── FieldValue ──────────────────────────────────────────────────────────────

/// The value of one field in a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Field missing or explicitly `null`.
    Absent,
    Scalar(Scalar),
    Sequence(Vec<FieldValue>),
    /// Nested mapping, in source order.
    Mapping(Vec<(String, FieldValue)>),
}

static ABSENT: FieldValue = FieldValue::Absent;

impl FieldValue {
    /// Convert a parsed YAML value. Tags are stripped; only mapping keys
    /// that are not scalars are rejected.
    pub fn from_yaml(value: &Value) -> Result<Self, String> {
        Ok(match value {
            Value::Null => FieldValue::Absent,
            Value::Bool(b) => FieldValue::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => FieldValue::Scalar(number_scalar(n)),
            Value::String(s) => FieldValue::Scalar(Scalar::Str(s.clone())),
            Value::Sequence(items) => FieldValue::Sequence(
                items
                    .iter()
                    .map(FieldValue::from_yaml)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    entries.push((mapping_key(key)?, FieldValue::from_yaml(value)?));
                }
                FieldValue::Mapping(entries)
            }
            Value::Tagged(tagged) => FieldValue::from_yaml(&tagged.value)?,
        })
    }

    /// Short name of this value's shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            FieldValue::Absent => "nothing",
            FieldValue::Scalar(_) => "a scalar",
            FieldValue::Sequence(_) => "a sequence",
            FieldValue::Mapping(_) => "a mapping",
        }
    }

    /// Look up a key in a mapping value. Returns `None` for other shapes.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        match self {
            FieldValue::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

fn number_scalar(n: &serde_yml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if n.is_f64() {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    } else {
        // Unsigned values beyond i64 keep the parser's rendering.
        Scalar::Str(n.to_string())
    }
}

fn mapping_key(key: &Value) -> Result<String, String> {
    match FieldValue::from_yaml(key)? {
        FieldValue::Scalar(s) => Ok(s.to_string()),
        FieldValue::Absent => Ok(String::new()),
        other => Err(format!("mapping key must be a scalar, found {}", other.shape())),
    }
}

// ── GameRecord ──────────────────────────────────────────────────────────────

/// Where a record came from: file name and position within the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOrigin {
    pub file: String,
    pub index: usize,
}

impl RecordOrigin {
    pub fn new(file: impl Into<String>, index: usize) -> Self {
        Self {
            file: file.into(),
            index,
        }
    }
}

impl fmt::Display for RecordOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entry #{}", self.file, self.index + 1)
    }
}

/// One catalog entry prior to flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    origin: RecordOrigin,
    fields: Vec<(String, FieldValue)>,
}

impl GameRecord {
    pub fn new(origin: RecordOrigin, fields: Vec<(String, FieldValue)>) -> Self {
        Self { origin, fields }
    }

    /// Build a record from a YAML value, which must be a mapping.
    pub fn from_yaml(origin: RecordOrigin, value: &Value) -> Result<Self, String> {
        match FieldValue::from_yaml(value)? {
            FieldValue::Mapping(fields) => Ok(Self::new(origin, fields)),
            other => Err(format!(
                "{origin}: expected a mapping, found {}",
                other.shape()
            )),
        }
    }

    pub fn origin(&self) -> &RecordOrigin {
        &self.origin
    }

    /// Value of a field, [`FieldValue::Absent`] when missing.
    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
            .unwrap_or(&ABSENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yml::from_str(s).unwrap()
    }

    #[test]
    fn scalar_text_forms() {
        assert_eq!(Scalar::Str("Foo".into()).to_string(), "Foo");
        assert_eq!(Scalar::Int(42).to_string(), "42");
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Float(0.25).to_string(), "0.25");
        assert_eq!(Scalar::Bool(true).to_string(), "True");
        assert_eq!(Scalar::Bool(false).to_string(), "False");
    }

    #[test]
    fn null_is_absent() {
        assert_eq!(FieldValue::from_yaml(&Value::Null).unwrap(), FieldValue::Absent);
    }

    #[test]
    fn mapping_keeps_source_order() {
        let value = FieldValue::from_yaml(&yaml("zeta: 1\nalpha: 2\nmid: 3\n")).unwrap();
        let FieldValue::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn numeric_keys_become_text() {
        let value = FieldValue::from_yaml(&yaml("1: one\n")).unwrap();
        assert_eq!(
            value.get("1"),
            Some(&FieldValue::Scalar(Scalar::Str("one".into())))
        );
    }

    #[test]
    fn record_lookup_defaults_to_absent() {
        let record =
            GameRecord::from_yaml(RecordOrigin::new("a.yaml", 0), &yaml("name: Foo\n")).unwrap();
        assert_eq!(
            record.get("name"),
            &FieldValue::Scalar(Scalar::Str("Foo".into()))
        );
        assert_eq!(record.get("langs"), &FieldValue::Absent);
    }

    #[test]
    fn record_must_be_mapping() {
        let err = GameRecord::from_yaml(RecordOrigin::new("a.yaml", 2), &yaml("- x\n")).unwrap_err();
        assert!(err.contains("a.yaml entry #3"), "{err}");
        assert!(err.contains("a sequence"), "{err}");
    }
}
