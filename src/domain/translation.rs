//! Per-language text variants keyed by ISO 639-1-like language tags.
//!
//! Only the tags in [`SUPPORTED_LANGUAGES`] survive filtering and
//! serialization. Anything else is treated as noise and silently dropped.

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub const SUPPORTED_LANGUAGES: [&str; 3] = [
    LanguageTag::ENGLISH,
    LanguageTag::POLISH,
    LanguageTag::UKRAINIAN,
];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub const ENGLISH: &'static str = "en";
    pub const POLISH: &'static str = "pl";
    pub const UKRAINIAN: &'static str = "ua";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn english() -> Self {
        Self::new(Self::ENGLISH)
    }

    pub fn polish() -> Self {
        Self::new(Self::POLISH)
    }

    pub fn ukrainian() -> Self {
        Self::new(Self::UKRAINIAN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_LANGUAGES.contains(&self.0.as_str())
    }
}

impl From<&str> for LanguageTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LanguageTag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<LanguageTag> for String {
    fn from(value: LanguageTag) -> Self {
        value.0
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of requested languages. An empty set means "no language filter".
pub type LanguageSet = BTreeSet<LanguageTag>;

/// Parse a comma separated list such as `en, pl` into a [`LanguageSet`].
///
/// Blank segments are skipped. Unsupported tags are kept: they simply never
/// match anything once the advert texts have been filtered.
pub fn parse_language_list(raw: &str) -> LanguageSet {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(LanguageTag::from)
        .collect()
}

/// Mapping from language tag to text, one entry per language.
///
/// Filtering is explicit: [`MultilingualText::supported`] returns a pruned
/// copy and [`MultilingualText::retain_supported`] prunes in place. The
/// `Serialize` impl emits only supported entries without touching `self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MultilingualText(BTreeMap<LanguageTag, String>);

impl MultilingualText {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, language: impl Into<LanguageTag>, text: impl Into<String>) -> Self {
        self.insert(language, text);
        self
    }

    pub fn insert(&mut self, language: impl Into<LanguageTag>, text: impl Into<String>) -> Option<String> {
        self.0.insert(language.into(), text.into())
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.0.contains_key(language)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageTag, &str)> {
        self.0.iter().map(|(lang, text)| (lang, text.as_str()))
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.0.keys()
    }

    /// True when no entry carries both a non-empty tag and a non-empty text.
    ///
    /// `{}` and `{"ua": ""}` are empty, `{"ua": "x"}` is not.
    pub fn is_empty(&self) -> bool {
        !self
            .0
            .iter()
            .any(|(lang, text)| !lang.as_str().is_empty() && !text.is_empty())
    }

    /// Copy of `self` without unsupported tags.
    #[must_use]
    pub fn supported(&self) -> Self {
        self.0
            .iter()
            .filter(|(lang, _)| lang.is_supported())
            .map(|(lang, text)| (lang.clone(), text.clone()))
            .collect()
    }

    /// Drop unsupported tags in place.
    pub fn retain_supported(&mut self) {
        self.0.retain(|lang, _| lang.is_supported());
    }

    /// Copy of `self` restricted to `languages`.
    #[must_use]
    pub fn restricted_to(&self, languages: &LanguageSet) -> Self {
        self.0
            .iter()
            .filter(|(lang, _)| languages.contains(*lang))
            .map(|(lang, text)| (lang.clone(), text.clone()))
            .collect()
    }

    /// Languages present in both `self` and `other`, in tag order.
    pub fn shared_languages<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a LanguageTag> + 'a {
        self.0.keys().filter(move |lang| other.0.contains_key(*lang))
    }
}

impl Serialize for MultilingualText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().filter(|(lang, _)| lang.is_supported()))
    }
}

impl FromIterator<(LanguageTag, String)> for MultilingualText {
    fn from_iter<I: IntoIterator<Item = (LanguageTag, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MultilingualText {
    fn from(entries: [(&str, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(lang, text)| (LanguageTag::from(lang), text.to_owned()))
            .collect()
    }
}

impl From<MultilingualText> for BTreeMap<String, String> {
    fn from(value: MultilingualText) -> Self {
        value.0.into_iter().map(|(lang, text)| (lang.0, text)).collect()
    }
}

impl From<BTreeMap<String, String>> for MultilingualText {
    fn from(value: BTreeMap<String, String>) -> Self {
        value.into_iter().map(|(lang, text)| (LanguageTag(lang), text)).collect()
    }
}

impl IntoIterator for MultilingualText {
    type Item = (LanguageTag, String);
    type IntoIter = std::collections::btree_map::IntoIter<LanguageTag, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> MultilingualText {
        MultilingualText::from([
            ("pl", "tytuł"),
            ("ua", "титул"),
            ("en", "title"),
            ("unsupported_language_tag", "x"),
        ])
    }

    #[test]
    fn retain_supported_drops_unknown_tags_and_keeps_the_rest() {
        let mut text = title();
        text.retain_supported();

        assert_eq!(text.get(LanguageTag::ENGLISH), Some("title"));
        assert_eq!(text.get(LanguageTag::POLISH), Some("tytuł"));
        assert_eq!(text.get(LanguageTag::UKRAINIAN), Some("титул"));
        assert!(!text.contains_language("unsupported_language_tag"));
        assert_eq!(text.len(), 3);
    }

    #[test]
    fn supported_leaves_the_original_untouched() {
        let text = title();
        let filtered = text.supported();

        assert_eq!(filtered.len(), 3);
        assert!(text.contains_language("unsupported_language_tag"));
    }

    #[test]
    fn serialization_skips_unsupported_tags_without_mutating() {
        let text = MultilingualText::from([("ua", "титул"), ("unsupported_language_tag", "X")]);

        let json = serde_json::to_value(&text).unwrap();

        assert_eq!(json, serde_json::json!({ "ua": "титул" }));
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn deserialization_keeps_raw_input() {
        let text: MultilingualText =
            serde_json::from_str(r#"{"en": "a", "xx": "b"}"#).unwrap();
        assert_eq!(text.len(), 2);
        assert_eq!(text.supported().len(), 1);
    }

    #[test]
    fn emptiness_follows_key_and_value() {
        let mut field = MultilingualText::new();
        assert!(field.is_empty());

        field.insert(LanguageTag::ukrainian(), "");
        assert!(field.is_empty());

        field.insert("", "orphan text");
        assert!(field.is_empty());

        field.insert(LanguageTag::ukrainian(), "x");
        assert!(!field.is_empty());
    }

    #[test]
    fn shared_languages_is_the_key_intersection() {
        let title = MultilingualText::from([("en", "A"), ("pl", "B"), ("ua", "C")]);
        let description = MultilingualText::from([("ua", "c"), ("en", "a")]);

        let shared: Vec<_> = title
            .shared_languages(&description)
            .map(LanguageTag::as_str)
            .collect();

        assert_eq!(shared, vec!["en", "ua"]);
    }

    #[test]
    fn restricted_to_keeps_only_requested_languages() {
        let text = MultilingualText::from([("en", "A"), ("ua", "Б")]);
        let requested = parse_language_list("en,de");

        let narrowed = text.restricted_to(&requested);

        assert_eq!(narrowed, MultilingualText::from([("en", "A")]));
    }

    #[test]
    fn parse_language_list_skips_blank_segments() {
        let set = parse_language_list(" en, ,pl,,en ");
        let tags: Vec<_> = set.iter().map(LanguageTag::as_str).collect();
        assert_eq!(tags, vec!["en", "pl"]);
        assert!(parse_language_list("").is_empty());
    }
}
