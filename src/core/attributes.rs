//! Typed named attributes for waveform objects.
//!
//! Attributes carry auxiliary parameters that are not intrinsic to the
//! waveform itself (station codes, processing flags, picks) but are
//! required by downstream algorithms. Stored as key-value pairs with
//! dynamically-typed values; the container never interprets keys.

use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

use crate::util::{Error, Result};

/// A dynamically-typed attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Real(f64),
    Int(i64),
    Boolean(bool),
    Text(String),
}

impl AttrValue {
    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Real(_) => "real",
            Self::Int(_) => "int",
            Self::Boolean(_) => "bool",
            Self::Text(_) => "text",
        }
    }

    /// Numeric value as `f64`. `Int` widens; other types are `None`.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Named-attribute storage - key-value pairs with typed values.
///
/// Uses SmallVec optimization for the common case of few entries.
/// Lookups are by key; iteration order is insertion order, but no
/// ordering semantics are guaranteed to callers.
#[derive(Clone, Default, PartialEq)]
pub struct Attributes {
    entries: SmallVec<[(String, AttrValue); 8]>,
}

impl Attributes {
    /// Create an empty attribute store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value, replacing any existing value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();

        for (k, v) in &mut self.entries {
            if k == &key {
                *v = value;
                return;
            }
        }
        self.entries.push((key, value));
    }

    /// Get an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key and return its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        if let Some(pos) = self.entries.iter().position(|(k, _)| k == key) {
            Some(self.entries.remove(pos).1)
        } else {
            None
        }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get a real-valued attribute. Integer values widen to `f64`.
    pub fn get_real(&self, key: &str) -> Result<f64> {
        let v = self.fetch(key)?;
        v.as_real().ok_or_else(|| Error::AttributeTypeMismatch {
            key: key.to_string(),
            expected: "real",
            actual: v.type_name(),
        })
    }

    /// Get an integer attribute.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        let v = self.fetch(key)?;
        v.as_int().ok_or_else(|| Error::AttributeTypeMismatch {
            key: key.to_string(),
            expected: "int",
            actual: v.type_name(),
        })
    }

    /// Get a boolean attribute.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        let v = self.fetch(key)?;
        v.as_bool().ok_or_else(|| Error::AttributeTypeMismatch {
            key: key.to_string(),
            expected: "bool",
            actual: v.type_name(),
        })
    }

    /// Get a text attribute.
    pub fn get_text(&self, key: &str) -> Result<&str> {
        let v = self.fetch(key)?;
        v.as_text().ok_or_else(|| Error::AttributeTypeMismatch {
            key: key.to_string(),
            expected: "text",
            actual: v.type_name(),
        })
    }

    fn fetch(&self, key: &str) -> Result<&AttrValue> {
        self.get(key)
            .ok_or_else(|| Error::AttributeNotFound(key.to_string()))
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl From<HashMap<String, AttrValue>> for Attributes {
    fn from(map: HashMap<String, AttrValue>) -> Self {
        let mut attrs = Self::new();
        for (k, v) in map {
            attrs.set(k, v);
        }
        attrs
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, AttrValue)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_basic() {
        let mut attrs = Attributes::new();
        attrs.set("sta", "AAK");
        attrs.set("calib", 1.5);
        attrs.set("nsamp", 1000i64);
        attrs.set("processed", true);

        assert_eq!(attrs.get("sta"), Some(&AttrValue::Text("AAK".into())));
        assert_eq!(attrs.get("missing"), None);
        assert_eq!(attrs.len(), 4);
        assert!(attrs.contains("calib"));
    }

    #[test]
    fn test_attributes_update_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("chan", "BHZ");
        attrs.set("chan", "BHN");

        assert_eq!(attrs.get_text("chan").unwrap(), "BHN");
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_attributes_remove() {
        let mut attrs = Attributes::new();
        attrs.set("flag", true);

        assert_eq!(attrs.remove("flag"), Some(AttrValue::Boolean(true)));
        assert_eq!(attrs.remove("flag"), None);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_typed_getters() {
        let mut attrs = Attributes::new();
        attrs.set("calib", 2.5);
        attrs.set("nsamp", 100i64);
        attrs.set("sta", "FUR");

        assert_eq!(attrs.get_real("calib").unwrap(), 2.5);
        assert_eq!(attrs.get_int("nsamp").unwrap(), 100);
        assert_eq!(attrs.get_text("sta").unwrap(), "FUR");

        // Int widens to real.
        assert_eq!(attrs.get_real("nsamp").unwrap(), 100.0);

        assert!(matches!(
            attrs.get_int("sta"),
            Err(Error::AttributeTypeMismatch { expected: "int", actual: "text", .. })
        ));
        assert!(matches!(
            attrs.get_real("missing"),
            Err(Error::AttributeNotFound(_))
        ));
    }

    #[test]
    fn test_from_hashmap() {
        let mut map = HashMap::new();
        map.insert("sta".to_string(), AttrValue::from("OBN"));
        map.insert("calib".to_string(), AttrValue::from(0.1));

        let attrs = Attributes::from(map);
        assert_eq!(attrs.get_text("sta").unwrap(), "OBN");
        assert_eq!(attrs.get_real("calib").unwrap(), 0.1);
    }
}
