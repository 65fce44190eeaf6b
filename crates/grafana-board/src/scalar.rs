//! Scalars that arrive as different JSON literal kinds across dashboard
//! generations.
//!
//! Each type remembers which kind it saw so encoding reproduces the same
//! kind of literal (boolean, string or number). The enums make it impossible
//! for two interpretations to be held at once.

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Literal string some generations emit instead of JSON `null`.
const NULL_LITERAL: &str = "null";

/// Largest magnitude at which every integer is exactly representable as f64.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn serialize_number<S>(value: f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// A float that encodes without a fraction when it has none.
struct Integral(f64);

impl Serialize for Integral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, serializer)
    }
}

/// `serialize_with` form of the integral float encoding.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_number(*value, serializer)
}

/// Optional variant of [`number`]; pair with `skip_serializing_if`.
pub(crate) fn optional_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize_number(*value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Sequence variant of [`number`].
pub(crate) fn number_list<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|value| Integral(*value)))
}

fn u64_to_i64<E: de::Error>(value: u64) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| E::custom(format!("integer {value} out of range")))
}

// ---------------------------------------------------------------------------

/// A boolean flag or a free-form string (`refresh`, series `stack`).
///
/// `"null"` and `null` decode to `Flag(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolString {
    /// A bare JSON boolean
    Flag(bool),
    /// A JSON string
    Text(String),
}

impl BoolString {
    /// The boolean interpretation; `false` when a string was seen.
    #[must_use]
    pub const fn flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }

    /// The string interpretation, if one was seen.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }
}

impl Default for BoolString {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl From<bool> for BoolString {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for BoolString {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for BoolString {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl Serialize for BoolString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(flag) => serializer.serialize_bool(*flag),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for BoolString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoolStringVisitor;

        impl<'de> Visitor<'de> for BoolStringVisitor {
            type Value = BoolString;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean or a string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(BoolString::Flag(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == NULL_LITERAL {
                    return Ok(BoolString::default());
                }
                Ok(BoolString::Text(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(BoolString::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(BoolString::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(BoolStringVisitor)
    }
}

// ---------------------------------------------------------------------------

/// A boolean flag or an integer (template variable `refresh`).
///
/// `"null"` and `null` decode to `Flag(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolInt {
    /// A bare JSON boolean
    Flag(bool),
    /// A bare JSON integer
    Int(i64),
}

impl BoolInt {
    /// The boolean interpretation; `false` when an integer was seen.
    #[must_use]
    pub const fn flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }

    /// The integer interpretation, if one was seen.
    #[must_use]
    pub const fn int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Flag(_) => None,
        }
    }
}

impl Default for BoolInt {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl From<bool> for BoolInt {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<i64> for BoolInt {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl Serialize for BoolInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(flag) => serializer.serialize_bool(*flag),
            Self::Int(value) => serializer.serialize_i64(*value),
        }
    }
}

impl<'de> Deserialize<'de> for BoolInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoolIntVisitor;

        impl<'de> Visitor<'de> for BoolIntVisitor {
            type Value = BoolInt;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean or an integer")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(BoolInt::Flag(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(BoolInt::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u64_to_i64(v).map(BoolInt::Int)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == NULL_LITERAL {
                    return Ok(BoolInt::default());
                }
                Err(E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(BoolInt::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(BoolInt::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(BoolIntVisitor)
    }
}

// ---------------------------------------------------------------------------

/// A float that may be missing, `null`, `"null"` or `""`.
///
/// Numeric strings such as `"0.5"` are accepted. Encodes as a bare number,
/// or `null` when invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatString(Option<f64>);

impl FloatString {
    /// A valid value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// The invalid (absent) value.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// The parsed value, if valid.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.0
    }

    /// Whether a number was seen.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

impl From<f64> for FloatString {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Serialize for FloatString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(value) => serialize_number(value, serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FloatString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FloatStringVisitor;

        impl<'de> Visitor<'de> for FloatStringVisitor {
            type Value = FloatString;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, a numeric string or null")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(FloatString::new(v))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(FloatString::new(v as f64))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(FloatString::new(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v.is_empty() || v == NULL_LITERAL {
                    return Ok(FloatString::invalid());
                }
                v.trim()
                    .parse::<f64>()
                    .map(FloatString::new)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FloatString::invalid())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FloatString::invalid())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(FloatStringVisitor)
    }
}

// ---------------------------------------------------------------------------

/// An integer that may be missing, `null`, `"null"` or `""`.
///
/// Numeric strings such as `"2"` are accepted. Encodes as a bare integer,
/// or `null` when invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntString(Option<i64>);

impl IntString {
    /// A valid value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// The invalid (absent) value.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// The parsed value, if valid.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        self.0
    }

    /// Whether a number was seen.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

impl From<i64> for IntString {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl Serialize for IntString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for IntString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IntStringVisitor;

        impl<'de> Visitor<'de> for IntStringVisitor {
            type Value = IntString;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer, a numeric string or null")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(IntString::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u64_to_i64(v).map(IntString::new)
            }

            #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if v.fract() == 0.0 && v.abs() < EXACT_INT_LIMIT {
                    return Ok(IntString::new(v as i64));
                }
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v.is_empty() || v == NULL_LITERAL {
                    return Ok(IntString::invalid());
                }
                v.trim()
                    .parse::<i64>()
                    .map(IntString::new)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(IntString::invalid())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(IntString::invalid())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(IntStringVisitor)
    }
}

// ---------------------------------------------------------------------------

/// One string or a list of strings (template `current.text`).
///
/// A bare string decodes to a one-element list. `"null"` and `null` decode
/// to the invalid value, which encodes back to the *string* `"null"`; Grafana
/// expects that literal. A valid value always encodes as an array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSliceString(Option<Vec<String>>);

impl StringSliceString {
    /// A valid list.
    #[must_use]
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Some(values.into_iter().map(Into::into).collect()))
    }

    /// The invalid value.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Whether a string or an array was seen.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The strings; empty when invalid.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        self.0.as_deref().unwrap_or_default()
    }
}

impl From<&str> for StringSliceString {
    fn from(value: &str) -> Self {
        Self::new([value])
    }
}

impl From<Vec<String>> for StringSliceString {
    fn from(values: Vec<String>) -> Self {
        Self(Some(values))
    }
}

impl Serialize for StringSliceString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(values) => values.serialize(serializer),
            None => serializer.serialize_str(NULL_LITERAL),
        }
    }
}

impl<'de> Deserialize<'de> for StringSliceString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SliceVisitor;

        impl<'de> Visitor<'de> for SliceVisitor {
            type Value = StringSliceString;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or an array of strings")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == NULL_LITERAL {
                    return Ok(StringSliceString::invalid());
                }
                Ok(StringSliceString::from(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element::<String>()? {
                    values.push(value);
                }
                Ok(StringSliceString(Some(values)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(StringSliceString::invalid())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(StringSliceString::invalid())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(SliceVisitor)
    }
}

// ---------------------------------------------------------------------------

/// A number or a string (row and panel `height`, e.g. `250` or `"250px"`).
#[derive(Debug, Clone, PartialEq)]
pub enum FloatOrString {
    /// A bare JSON number
    Number(f64),
    /// A JSON string
    Text(String),
}

impl FloatOrString {
    /// The numeric interpretation, if one was seen.
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// The string interpretation, if one was seen.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for FloatOrString {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FloatOrString {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl Serialize for FloatOrString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serialize_number(*value, serializer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for FloatOrString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FloatOrStringVisitor;

        impl<'de> Visitor<'de> for FloatOrStringVisitor {
            type Value = FloatOrString;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(FloatOrString::Number(v))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(FloatOrString::Number(v as f64))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(FloatOrString::Number(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(FloatOrString::Text(v.to_string()))
            }
        }

        deserializer.deserialize_any(FloatOrStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct Holder<T> {
        val: T,
    }

    fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value::<Holder<T>>(value).unwrap().val
    }

    fn encode<T: Serialize>(val: T) -> serde_json::Value {
        serde_json::to_value(Holder { val }).unwrap()
    }

    #[test]
    fn test_bool_string_flag() {
        let decoded: BoolString = decode(json!({"val": true}));
        assert!(decoded.flag());
        assert_eq!(decoded.text(), None);
        assert_eq!(encode(decoded), json!({"val": true}));
    }

    #[test]
    fn test_bool_string_text() {
        let decoded: BoolString = decode(json!({"val": "A"}));
        assert!(!decoded.flag());
        assert_eq!(decoded.text(), Some("A"));
        assert_eq!(encode(decoded), json!({"val": "A"}));
    }

    #[test]
    fn test_bool_string_null_literal() {
        let decoded: BoolString = decode(json!({"val": "null"}));
        assert_eq!(decoded, BoolString::Flag(false));
        let decoded: BoolString = decode(json!({"val": null}));
        assert_eq!(decoded, BoolString::Flag(false));
    }

    #[test]
    fn test_bool_string_rejects_containers() {
        assert!(serde_json::from_value::<Holder<BoolString>>(json!({"val": {}})).is_err());
        assert!(serde_json::from_value::<Holder<BoolString>>(json!({"val": [1]})).is_err());
        assert!(serde_json::from_value::<Holder<BoolString>>(json!({"val": 1})).is_err());
    }

    #[test]
    fn test_bool_int() {
        let decoded: BoolInt = decode(json!({"val": 123_456_789}));
        assert_eq!(decoded.int(), Some(123_456_789));
        assert!(!decoded.flag());
        assert_eq!(encode(decoded), json!({"val": 123_456_789}));

        let decoded: BoolInt = decode(json!({"val": true}));
        assert!(decoded.flag());
        assert_eq!(decoded.int(), None);
        assert_eq!(encode(decoded), json!({"val": true}));

        let decoded: BoolInt = decode(json!({"val": "null"}));
        assert_eq!(decoded, BoolInt::Flag(false));
    }

    #[test]
    fn test_bool_int_rejects_other_strings() {
        assert!(serde_json::from_value::<Holder<BoolInt>>(json!({"val": "1"})).is_err());
        assert!(serde_json::from_value::<Holder<BoolInt>>(json!({"val": 1.5})).is_err());
    }

    #[test]
    fn test_float_string() {
        let decoded: FloatString = decode(json!({"val": 0.5}));
        assert_eq!(decoded.value(), Some(0.5));
        assert_eq!(encode(decoded), json!({"val": 0.5}));

        let decoded: FloatString = decode(json!({"val": "12"}));
        assert!(decoded.is_valid());
        assert_eq!(encode(decoded), json!({"val": 12}));

        for invalid in [json!(null), json!("null"), json!("")] {
            let decoded: FloatString = decode(json!({ "val": invalid }));
            assert!(!decoded.is_valid());
            assert_eq!(encode(decoded), json!({"val": null}));
        }

        assert!(serde_json::from_value::<Holder<FloatString>>(json!({"val": "auto"})).is_err());
    }

    #[test]
    fn test_int_string() {
        let decoded: IntString = decode(json!({"val": "3"}));
        assert_eq!(decoded.value(), Some(3));
        assert_eq!(encode(decoded), json!({"val": 3}));

        let decoded: IntString = decode(json!({"val": ""}));
        assert_eq!(decoded, IntString::invalid());
        assert_eq!(encode(decoded), json!({"val": null}));

        assert!(serde_json::from_value::<Holder<IntString>>(json!({"val": 1.5})).is_err());
    }

    #[test]
    fn test_string_slice_string_single() {
        let decoded: StringSliceString = decode(json!({"val": "this is a test"}));
        assert!(decoded.is_valid());
        assert_eq!(decoded.as_slice(), ["this is a test".to_string()]);
        assert_eq!(encode(decoded), json!({"val": ["this is a test"]}));
    }

    #[test]
    fn test_string_slice_string_null() {
        let decoded: StringSliceString = decode(json!({"val": "null"}));
        assert!(!decoded.is_valid());
        assert!(decoded.as_slice().is_empty());
        assert_eq!(encode(decoded), json!({"val": "null"}));

        let decoded: StringSliceString = decode(json!({"val": null}));
        assert!(!decoded.is_valid());
    }

    #[test]
    fn test_string_slice_string_empty_array() {
        let decoded: StringSliceString = decode(json!({"val": []}));
        assert!(decoded.is_valid());
        assert!(decoded.as_slice().is_empty());
        assert_eq!(encode(decoded), json!({"val": []}));
    }

    #[test]
    fn test_float_or_string() {
        let decoded: FloatOrString = decode(json!({"val": "250px"}));
        assert_eq!(decoded.text(), Some("250px"));
        assert_eq!(encode(decoded), json!({"val": "250px"}));

        let decoded: FloatOrString = decode(json!({"val": 250}));
        assert_eq!(decoded.number(), Some(250.0));
        assert_eq!(encode(decoded), json!({"val": 250}));
    }
}
