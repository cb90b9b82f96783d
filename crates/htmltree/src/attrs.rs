//! Insertion-ordered attribute map and the shared attribute renderer.

use std::fmt::Write;

/// Insertion-ordered string map for HTML tag attributes.
///
/// Keys are unique. Inserting an existing key updates its value in place
/// without changing its position, so rendering order is stable and
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrMap {
    entries: Vec<(String, String)>,
}

impl AttrMap {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update an attribute.
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of attributes in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for AttrMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Render the fragment spliced directly after a tag name.
///
/// An absent map produces exactly one space. A present-but-empty map
/// produces an empty string. Otherwise each entry becomes ` key="value"` in
/// insertion order. Values are emitted verbatim, without escaping.
#[must_use]
pub fn render_attributes(attrs: Option<&AttrMap>) -> String {
    let Some(attrs) = attrs else {
        return " ".to_owned();
    };
    let mut out = String::new();
    for (key, value) in attrs.iter() {
        write!(out, r#" {key}="{value}""#).unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_map_renders_single_space() {
        assert_eq!(render_attributes(None), " ");
    }

    #[test]
    fn empty_map_renders_nothing() {
        assert_eq!(render_attributes(Some(&AttrMap::new())), "");
    }

    #[test]
    fn single_entry() {
        let attrs = AttrMap::from([("class", "paragraph")]);
        assert_eq!(render_attributes(Some(&attrs)), r#" class="paragraph""#);
    }

    #[test]
    fn entries_render_in_insertion_order() {
        let attrs = AttrMap::from([("href", "https://www.google.com"), ("target", "_blank")]);
        assert_eq!(
            render_attributes(Some(&attrs)),
            r#" href="https://www.google.com" target="_blank""#
        );
    }

    #[test]
    fn values_are_not_escaped() {
        let attrs = AttrMap::from([("data-raw", r#"a<b>"c""#)]);
        assert_eq!(render_attributes(Some(&attrs)), r#" data-raw="a<b>"c"""#);
    }

    #[test]
    fn insert_existing_key_updates_in_place() {
        let mut attrs = AttrMap::from([("type", "text"), ("id", "field")]);
        attrs.insert("type", "password");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("type"), Some("password"));
        assert_eq!(
            render_attributes(Some(&attrs)),
            r#" type="password" id="field""#
        );
    }

    #[test]
    fn get_unknown_key_is_none() {
        let attrs = AttrMap::from([("id", "main")]);
        assert_eq!(attrs.get("class"), None);
    }

    #[test]
    fn collected_from_iterator() {
        let attrs: AttrMap = vec![("type", "submit"), ("class", "btn"), ("id", "submit-btn")]
            .into_iter()
            .collect();

        assert_eq!(attrs.len(), 3);
        assert_eq!(
            render_attributes(Some(&attrs)),
            r#" type="submit" class="btn" id="submit-btn""#
        );
    }
}
