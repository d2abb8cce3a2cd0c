//! Language switcher map.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display name to locale code, e.g. `English -> en`.
///
/// Keeps declaration order, which is the order of the language switcher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageMap(Vec<(String, String)>);

impl LanguageMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language, replacing any previous code for `name` in place.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.insert(name.into(), code.into());
        self
    }

    fn insert(&mut self, name: String, code: String) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = code,
            None => self.0.push((name, code)),
        }
    }

    /// Whether any language uses `code`.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.codes().any(|c| c == code)
    }

    /// Display name for `code`.
    #[must_use]
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.iter().find(|(_, c)| *c == code).map(|(name, _)| name)
    }

    /// Locale codes in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, code)| code.as_str())
    }

    /// Iterate `(name, code)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Codes used by more than one display name.
    #[must_use]
    pub fn duplicate_codes(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for code in self.codes() {
            if !seen.insert(code) {
                duplicates.insert(code);
            }
        }
        duplicates.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for LanguageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, code) in &self.0 {
            map.serialize_entry(name, code)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LanguageMapVisitor;

        impl<'de> Visitor<'de> for LanguageMapVisitor {
            type Value = LanguageMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of language names to locale codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LanguageMap, A::Error> {
                let mut languages = LanguageMap::new();
                while let Some((name, code)) = access.next_entry::<String, String>()? {
                    languages.insert(name, code);
                }
                Ok(languages)
            }
        }

        deserializer.deserialize_map(LanguageMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_by_code() {
        let languages = LanguageMap::new().with("English", "en").with("Deutsch", "de");
        assert!(languages.contains_code("en"));
        assert!(!languages.contains_code("fr"));
        assert_eq!(languages.name_of("de"), Some("Deutsch"));
        assert_eq!(languages.name_of("fr"), None);
    }

    #[test]
    fn test_duplicate_codes() {
        let languages = LanguageMap::new()
            .with("English", "en")
            .with("English (US)", "en")
            .with("Deutsch", "de");
        assert_eq!(languages.duplicate_codes(), vec!["en"]);
    }

    #[test]
    fn test_with_replaces_in_place() {
        let languages = LanguageMap::new()
            .with("English", "en")
            .with("Deutsch", "de")
            .with("English", "en-GB");
        let pairs: Vec<_> = languages.iter().collect();
        assert_eq!(pairs, vec![("English", "en-GB"), ("Deutsch", "de")]);
    }

    #[test]
    fn test_parse_from_toml_table() {
        let languages: LanguageMap = toml::from_str("English = \"en\"\n\"Español\" = \"es\"").unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages.name_of("es"), Some("Español"));
    }

    #[test]
    fn test_toml_keeps_declaration_order() {
        let languages: LanguageMap =
            toml::from_str("English = \"en\"\nDeutsch = \"de\"\n\"Español\" = \"es\"").unwrap();
        let names: Vec<&str> = languages.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["English", "Deutsch", "Español"]);
    }

    #[test]
    fn test_json_keeps_declaration_order() {
        let languages = LanguageMap::new().with("English", "en").with("Deutsch", "de");
        assert_eq!(
            serde_json::to_string(&languages).unwrap(),
            r#"{"English":"en","Deutsch":"de"}"#
        );
    }
}
