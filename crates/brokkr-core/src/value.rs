//! Settings value model.
//!
//! A profile maps string keys to values drawn from a closed set of
//! variants: booleans, numbers, text, and nested mappings. Consumers
//! dispatch on [`ValueKind`] instead of matching on type-name strings;
//! anything outside this set (arrays, null) fails decoding as malformed
//! data.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

/// A profile's settings: string keys mapped to setting values.
pub type SettingsMap = BTreeMap<String, SettingValue>;

/// A single setting value.
///
/// `Number` wraps [`serde_json::Number`] so integers and floats round-trip
/// numerically exactly through the canonical encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(Number),
    Text(String),
    Mapping(SettingsMap),
}

/// The variant of a [`SettingValue`], for dispatch without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Number,
    Text,
    Mapping,
}

impl ValueKind {
    /// Returns the kind name as used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SettingValue {
    /// Returns the variant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::Bool(_) => ValueKind::Bool,
            SettingValue::Number(_) => ValueKind::Number,
            SettingValue::Text(_) => ValueKind::Text,
            SettingValue::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Returns the boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number, if this is a `Number`.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            SettingValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the number as an `i64`, if it is an integral `Number`.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns the number as an `f64`, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    /// Returns the string slice, if this is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested mapping, if this is a `Mapping`.
    pub fn as_mapping(&self) -> Option<&SettingsMap> {
        match self {
            SettingValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Builds a `Number` value from a float. Returns `None` for NaN and
    /// infinities, which have no canonical encoding.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(SettingValue::Number)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Number(Number::from(value))
    }
}

impl From<u64> for SettingValue {
    fn from(value: u64) -> Self {
        SettingValue::Number(Number::from(value))
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<SettingsMap> for SettingValue {
    fn from(value: SettingsMap) -> Self {
        SettingValue::Mapping(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(SettingValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(SettingValue::from(42i64).kind(), ValueKind::Number);
        assert_eq!(SettingValue::from("hello").kind(), ValueKind::Text);
        assert_eq!(
            SettingValue::from(SettingsMap::new()).kind(),
            ValueKind::Mapping
        );
        assert_eq!(ValueKind::Mapping.to_string(), "mapping");
    }

    #[test]
    fn test_accessors_reject_wrong_variant() {
        let value = SettingValue::from("text");
        assert_eq!(value.as_text(), Some("text"));
        assert!(value.as_bool().is_none());
        assert!(value.as_number().is_none());
        assert!(value.as_mapping().is_none());
    }

    #[test]
    fn test_integer_exactness() {
        let value = SettingValue::from(i64::MAX);
        assert_eq!(value.as_i64(), Some(i64::MAX));
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        assert!(SettingValue::from_f64(f64::NAN).is_none());
        assert!(SettingValue::from_f64(1.5).is_some());
    }

    #[test]
    fn test_untagged_decoding() {
        let value: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, SettingValue::Bool(true));

        let value: SettingValue = serde_json::from_str("3.25").unwrap();
        assert_eq!(value.as_f64(), Some(3.25));

        let value: SettingValue = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert_eq!(value.kind(), ValueKind::Mapping);
    }

    #[test]
    fn test_untagged_rejects_open_shapes() {
        assert!(serde_json::from_str::<SettingValue>("null").is_err());
        assert!(serde_json::from_str::<SettingValue>("[1, 2]").is_err());
    }
}
