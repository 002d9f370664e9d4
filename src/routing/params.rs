//! Named parameters bound during a dispatch.

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from placeholder name to the path segment it matched.
///
/// Empty when the matched route has no placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value bound to `name`, if the route declared that placeholder.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let params: Params = [("id", "42"), ("slug", "intro")].into_iter().collect();

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("slug"), Some("intro"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
        assert!(params.contains("id"));
    }

    #[test]
    fn test_serializes_as_object() {
        let params: Params = [("id", "7")].into_iter().collect();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"id":"7"}"#);
    }
}
