//! Flattened style descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat key-value style mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Map<String, Value>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style every image starts from.
    pub fn base() -> Self {
        Self::new().set("overflow", "hidden")
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge styles in order; later keys replace earlier ones.
    pub fn flatten<'a>(styles: impl IntoIterator<Item = &'a Style>) -> Style {
        let mut merged = Map::new();
        for style in styles {
            for (key, value) in &style.0 {
                merged.insert(key.clone(), value.clone());
            }
        }
        Style(merged)
    }
}

impl From<Map<String, Value>> for Style {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_styles_win() {
        let a = Style::new().set("width", 10).set("opacity", 1);
        let b = Style::new().set("width", 20);
        let flat = Style::flatten([&a, &b]);
        assert_eq!(flat.get("width"), Some(&Value::from(20)));
        assert_eq!(flat.get("opacity"), Some(&Value::from(1)));
    }

    #[test]
    fn base_hides_overflow() {
        assert_eq!(Style::base().get_str("overflow"), Some("hidden"));
    }

    #[test]
    fn flatten_of_nothing_is_empty() {
        assert!(Style::flatten(std::iter::empty()).is_empty());
    }
}
