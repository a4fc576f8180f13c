//! Root-element attribute mirror
//!
//! The theme is mirrored onto the document root as two attributes so global
//! stylesheets can key off them. [`RootAttributes`] abstracts over whatever
//! owns the root element; [`AttributeMap`] records them for static rendering.

use std::sync::{Arc, PoisonError, RwLock};

use html_escape::encode_double_quoted_attribute;

/// Root attribute carrying the color scheme id
pub const COLOR_SCHEME_ATTR: &str = "data-color-scheme";

/// Root attribute carrying the theme mode id
pub const THEME_MODE_ATTR: &str = "data-theme";

/// Sink for root-element attributes
pub trait RootAttributes: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);
}

impl<T: RootAttributes + ?Sized> RootAttributes for Arc<T> {
    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}

/// Attributes kept in insertion order
#[derive(Debug, Default)]
pub struct AttributeMap {
    attrs: RwLock<Vec<(String, String)>>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.attrs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Snapshot of all attributes
    pub fn entries(&self) -> Vec<(String, String)> {
        self.attrs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Render as `name="value"` pairs separated by spaces
    pub fn to_attribute_string(&self) -> String {
        self.attrs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(n, v)| format!("{n}=\"{}\"", encode_double_quoted_attribute(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RootAttributes for AttributeMap {
    fn set_attribute(&self, name: &str, value: &str) {
        let mut attrs = self.attrs.write().unwrap_or_else(PoisonError::into_inner);
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_keep_position() {
        let map = AttributeMap::new();
        map.set_attribute(COLOR_SCHEME_ATTR, "cyan");
        map.set_attribute(THEME_MODE_ATTR, "dark");
        map.set_attribute(COLOR_SCHEME_ATTR, "purple");

        assert_eq!(map.get(COLOR_SCHEME_ATTR).as_deref(), Some("purple"));
        assert_eq!(
            map.entries(),
            vec![
                (COLOR_SCHEME_ATTR.to_string(), "purple".to_string()),
                (THEME_MODE_ATTR.to_string(), "dark".to_string()),
            ]
        );
        assert_eq!(
            map.to_attribute_string(),
            r#"data-color-scheme="purple" data-theme="dark""#
        );
    }

    #[test]
    fn attribute_string_escapes_values() {
        let map = AttributeMap::new();
        map.set_attribute("data-label", r#"Tom & "Jerry""#);
        assert_eq!(
            map.to_attribute_string(),
            r#"data-label="Tom &amp; &quot;Jerry&quot;""#
        );
    }
}
