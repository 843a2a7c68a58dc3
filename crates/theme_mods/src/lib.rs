//! Read-only snapshot of theme modifications.
//!
//! The host stores customizer choices as loosely typed key/value pairs. This
//! crate loads them from a JSON object and exposes lookups with explicit
//! defaults, so the layout and typography code never reaches for global state.

#![forbid(unsafe_code)]

use core::error::Error;
use core::fmt;
use log::{trace, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs::read_to_string;
use std::io;
use std::path::Path;

/// Failure to load a theme-mods document.
#[derive(Debug)]
pub enum ThemeModsError {
    /// The file could not be read.
    Io(io::Error),
    /// The document is not valid JSON.
    Parse(serde_json::Error),
    /// The document parsed, but its root is not an object.
    NotAnObject,
}

impl fmt::Display for ThemeModsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(formatter, "cannot read theme mods: {err}"),
            Self::Parse(err) => write!(formatter, "invalid theme mods JSON: {err}"),
            Self::NotAnObject => formatter.write_str("theme mods root must be a JSON object"),
        }
    }
}

impl Error for ThemeModsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::NotAnObject => None,
        }
    }
}

impl From<io::Error> for ThemeModsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ThemeModsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Theme modification store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeMods {
    values: Map<String, Value>,
}

impl ThemeMods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `key -> value`.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or its root is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, ThemeModsError> {
        match serde_json::from_str(text)? {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(ThemeModsError::NotAnObject),
        }
    }

    /// Load a JSON object file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ThemeModsError> {
        let text = read_to_string(path)?;
        let mods = Self::from_json_str(&text)?;
        trace!(target: "theme_mods", "loaded {} mods from {}", mods.len(), path.display());
        Ok(mods)
    }

    /// Builder-style insert, mostly for assembling fixtures.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(key.to_owned(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The stored value, with JSON `null` treated as unset.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    /// Loose boolean cast, `default` when unset.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.raw(key).map_or(default, is_truthy)
    }

    /// String value, `default` when unset. Numbers and booleans are rendered
    /// the way the host would stringify them.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.raw(key)
            .and_then(scalar_to_string)
            .unwrap_or_else(|| default.to_owned())
    }

    /// The value as a string only when it is non-empty in the host's sense
    /// (`""` and `"0"` are empty).
    pub fn non_empty_str(&self, key: &str) -> Option<String> {
        self.raw(key)
            .filter(|value| is_truthy(value))
            .and_then(scalar_to_string)
    }

    /// Decode a structured mod.
    ///
    /// Structured values are stored either as nested JSON or as a JSON-encoded
    /// string. Empty values yield `None`; undecodable ones are logged and
    /// also yield `None` so the caller falls back to its default.
    pub fn decode<Decoded: DeserializeOwned>(&self, key: &str) -> Option<Decoded> {
        let value = self.raw(key).filter(|value| is_truthy(value))?;
        let decoded = match value {
            Value::String(encoded) => serde_json::from_str(encoded),
            other => serde_json::from_value(other.clone()),
        };
        match decoded {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(target: "theme_mods", "ignoring undecodable mod `{key}`: {err}");
                None
            }
        }
    }
}

/// Loose truthiness: `false`, `0`, `""`, `"0"`, `null`, and empty
/// arrays/objects are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some("1".to_owned()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bool_lookup_casts_loosely() {
        let mods = ThemeMods::new()
            .with("yes", "1")
            .with("no", "0")
            .with("empty", "")
            .with("num", 2)
            .with("flag", false);

        assert!(mods.bool_or("yes", false));
        assert!(!mods.bool_or("no", true));
        assert!(!mods.bool_or("empty", true));
        assert!(mods.bool_or("num", false));
        assert!(!mods.bool_or("flag", true));
        assert!(mods.bool_or("missing", true));
    }

    #[test]
    fn null_counts_as_unset() {
        let mods = ThemeMods::new().with("layout", Value::Null);
        assert_eq!(mods.str_or("layout", "left"), "left");
        assert_eq!(mods.raw("layout"), None);
    }

    #[test]
    fn non_empty_str_matches_host_emptiness() {
        let mods = ThemeMods::new()
            .with("weight", 700)
            .with("zero", "0")
            .with("family", "Inter");
        assert_eq!(mods.non_empty_str("weight").as_deref(), Some("700"));
        assert_eq!(mods.non_empty_str("zero"), None);
        assert_eq!(mods.non_empty_str("family").as_deref(), Some("Inter"));
    }

    #[test]
    fn decode_accepts_encoded_and_nested_json() {
        let mods = ThemeMods::new()
            .with("encoded", r#"{"mobile":1}"#)
            .with("nested", json!({"mobile": 2}))
            .with("broken", "{not json");

        let encoded: Option<Map<String, Value>> = mods.decode("encoded");
        let nested: Option<Map<String, Value>> = mods.decode("nested");
        let broken: Option<Map<String, Value>> = mods.decode("broken");

        assert_eq!(encoded.and_then(|map| map.get("mobile").cloned()), Some(json!(1)));
        assert_eq!(nested.and_then(|map| map.get("mobile").cloned()), Some(json!(2)));
        assert_eq!(broken, None);
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(matches!(
            ThemeMods::from_json_str("[1, 2]"),
            Err(ThemeModsError::NotAnObject)
        ));
        assert!(matches!(
            ThemeMods::from_json_str("{"),
            Err(ThemeModsError::Parse(_))
        ));
    }
}
