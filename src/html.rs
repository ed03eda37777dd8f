//! Markup building blocks.
//!
//! An insertion-ordered attribute map plus the handful of tag helpers the
//! widget needs. Attribute values are always escaped; element content is
//! written verbatim so callers can nest already rendered fragments.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered HTML attribute map.
///
/// Keys are unique; inserting an existing key replaces its value in place so
/// the rendered attribute order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Removes `key` and returns its value, or `default` when absent.
    pub fn remove_or(&mut self, key: &str, default: &str) -> String {
        self.remove(key).unwrap_or_else(|| default.to_string())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Escapes text for use inside a double-quoted attribute value or as element text.
pub fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_attributes(attrs: &Attributes) -> String {
    let mut out = String::new();
    for (k, v) in attrs.iter() {
        out.push(' ');
        out.push_str(k);
        out.push_str("=\"");
        out.push_str(&encode(v));
        out.push('"');
    }
    out
}

pub fn begin_tag(name: &str, attrs: &Attributes) -> String {
    format!("<{}{}>", name, render_attributes(attrs))
}

pub fn end_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// Renders `<name attrs>content</name>`. `content` is not escaped.
pub fn tag(name: &str, content: &str, attrs: &Attributes) -> String {
    format!("{}{}{}", begin_tag(name, attrs), content, end_tag(name))
}

/// Renders a checkbox input named `name` with value `1`.
///
/// `type`, `name` and `value` come first; `attrs` may override `value` or
/// `name` but never `type`.
pub fn checkbox(name: &str, checked: bool, attrs: &Attributes) -> String {
    let mut all = Attributes::new()
        .with("type", "checkbox")
        .with("name", name)
        .with("value", "1");
    for (k, v) in attrs.iter() {
        if k != "type" {
            all.insert(k, v);
        }
    }
    if checked {
        all.insert("checked", "checked");
    }
    format!("<input{}>", render_attributes(&all))
}
