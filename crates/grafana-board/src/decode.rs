//! Decoding helpers shared by the model types.
//!
//! Decoders report failures as `at `<path>`: <message>` strings so that
//! nested records can prefix their own key while the error travels outward.
//! [`into_error`] turns such a string into [`Error::FieldTypeMismatch`].

use crate::extension::ExtensionBag;
use crate::panel::Panel;
use grafana_core::Error;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::cell::Cell;

const PATH_OPEN: &str = "at `";
const PATH_CLOSE: &str = "`: ";

/// A record plus every key the record does not model, in input order.
#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct Extended<T> {
    #[serde(flatten)]
    pub inner: T,
    #[serde(flatten)]
    pub extra: ExtensionBag,
}

/// Splits a path-annotated message into `(path, message)`.
pub(crate) fn split_path(message: &str) -> Option<(&str, &str)> {
    let rest = message.strip_prefix(PATH_OPEN)?;
    let end = rest.find(PATH_CLOSE)?;
    Some((&rest[..end], &rest[end + PATH_CLOSE.len()..]))
}

/// Prefixes `key` to the path carried by `inner`.
pub(crate) fn nest(key: &str, inner: &str) -> String {
    match split_path(inner) {
        Some((path, message)) => format!("{PATH_OPEN}{key}.{path}{PATH_CLOSE}{message}"),
        None => format!("{PATH_OPEN}{key}{PATH_CLOSE}{inner}"),
    }
}

/// Converts a decoder message into the public error type.
pub(crate) fn into_error(message: &str) -> Error {
    match split_path(message) {
        Some((path, message)) => Error::mismatch(path, message),
        None => Error::mismatch("<root>", message),
    }
}

/// Parses a JSON document without a nesting limit.
///
/// The stack grows on demand while parsing, so deeply nested rows do not
/// overflow it.
pub(crate) fn parse_document(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_slice(bytes);
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// Decodes `value` into `T`, naming the first top-level key that fails.
///
/// `T` must tolerate missing keys (container-level `#[serde(default)]`) so a
/// single-key object can isolate the offending field.
pub(crate) fn decode_object<T>(value: &Value) -> Result<T, String>
where
    T: DeserializeOwned,
{
    match T::deserialize(serde_stacker::Deserializer::new(value)) {
        Ok(decoded) => Ok(decoded),
        Err(err) => {
            let message = err.to_string();
            let Value::Object(map) = value else {
                return Err(message);
            };
            if SEARCHING.with(Cell::get) {
                return Err(message);
            }
            Err(locate_mismatch::<T>(map, &message).unwrap_or(message))
        }
    }
}

thread_local! {
    /// Set while an outer object looks for its failing key. Nested objects
    /// then fail fast; the outer message already carries their path.
    static SEARCHING: Cell<bool> = const { Cell::new(false) };
}

struct Searching(bool);

impl Searching {
    fn enter() -> Self {
        Self(SEARCHING.with(|flag| flag.replace(true)))
    }
}

impl Drop for Searching {
    fn drop(&mut self) {
        SEARCHING.with(|flag| flag.set(self.0));
    }
}

/// Finds the key of `map` that fails on its own and prefixes it to `message`.
fn locate_mismatch<T>(map: &Map<String, Value>, message: &str) -> Option<String>
where
    T: DeserializeOwned,
{
    let _searching = Searching::enter();
    map.iter().find_map(|(key, value)| {
        let mut single = Map::with_capacity(1);
        single.insert(key.clone(), value.clone());
        let single = Value::Object(single);
        T::deserialize(serde_stacker::Deserializer::new(&single))
            .err()
            .map(|_| nest(key, message))
    })
}

/// `skip_serializing_if` predicate for flags emitted only when set.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}

/// Treats JSON `null` like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a nullable array, annotating failures with the element index.
pub(crate) fn located_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            decode_object::<T>(item).map_err(|msg| D::Error::custom(nest(&index.to_string(), &msg)))
        })
        .collect()
}

/// Decodes a nullable array of panels.
///
/// Panels already report full paths, so only the index is added.
pub(crate) fn panel_vec<'de, D>(deserializer: D) -> Result<Vec<Panel>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Panel::decode_value(item).map_err(|msg| D::Error::custom(nest(&index.to_string(), &msg)))
        })
        .collect()
}
