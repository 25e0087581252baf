//! Art-style catalog with document-order preserving maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Style used when neither a custom style nor a genre matches the catalog.
pub const DEFAULT_STYLE_PROMPT: &str = "Watercolor illustration with soft, blended colors";

/// A string-keyed map that keeps the order keys appeared in the source
/// document, so "the first custom style" is well defined.
///
/// # Examples
///
/// ```
/// use storyloom_core::OrderedMap;
///
/// let styles: OrderedMap<String> =
///     serde_json::from_str(r#"{"zeta": "z", "alpha": "a"}"#).unwrap();
/// assert_eq!(styles.first().map(|(k, _)| k.as_str()), Some("zeta"));
/// ```
pub type OrderedMap<V> = IndexMap<String, V>;

/// The `art_styles` section: genre style lists and named custom styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ArtStyles {
    /// Genre name to candidate style prompts, most preferred first.
    #[serde(default)]
    genres: OrderedMap<Vec<String>>,

    /// Custom style name to style prompt.
    #[serde(default)]
    custom_styles: OrderedMap<String>,
}

impl ArtStyles {
    /// Create a catalog from explicit maps.
    pub fn new(genres: OrderedMap<Vec<String>>, custom_styles: OrderedMap<String>) -> Self {
        Self {
            genres,
            custom_styles,
        }
    }

    /// Style prompt for a custom style name (exact match).
    pub fn custom_style(&self, name: &str) -> Option<&str> {
        self.custom_styles.get(name).map(String::as_str)
    }

    /// First style prompt for a genre, matched case-insensitively.
    pub fn genre_style(&self, genre: &str) -> Option<&str> {
        let wanted = genre.to_lowercase();
        self.genres
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .and_then(|(_, styles)| styles.first())
            .map(String::as_str)
    }

    /// The first custom style in document order.
    pub fn first_custom_style(&self) -> Option<&str> {
        self.custom_styles.first().map(|(_, style)| style.as_str())
    }

    /// Genre names in document order.
    pub fn genre_names(&self) -> Vec<String> {
        self.genres.keys().cloned().collect()
    }

    /// Custom style names in document order.
    pub fn custom_style_names(&self) -> Vec<String> {
        self.custom_styles.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_duplicate_key_replaces_value_in_place() {
        let map: OrderedMap<String> =
            serde_json::from_str(r#"{"a": "1", "b": "2", "a": "3"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.first().map(|(k, v)| (k.as_str(), v.as_str())),
            Some(("a", "3"))
        );
    }

    #[test]
    fn genre_lookup_ignores_case_and_skips_empty_lists() {
        let styles: ArtStyles = serde_json::from_str(
            r#"{"genres": {"SciFi": ["Neon cyberpunk", "Chrome"], "noir": []}}"#,
        )
        .unwrap();
        assert_eq!(styles.genre_style("scifi"), Some("Neon cyberpunk"));
        assert_eq!(styles.genre_style("noir"), None);
        assert!(styles.custom_styles().is_empty());
    }
}
