//! Art-style prompt resolution.

use storyloom_core::{ArtStyles, StoryloomConfig};
use tracing::debug;

pub use storyloom_core::DEFAULT_STYLE_PROMPT;

/// Resolves genre and custom-style selections to an art style prompt.
///
/// Resolution is a pure function of the catalog and the inputs.
///
/// # Examples
///
/// ```
/// use storyloom_core::{ArtStyles, OrderedMap};
/// use storyloom_narrative::{StyleResolver, DEFAULT_STYLE_PROMPT};
///
/// let genres: OrderedMap<Vec<String>> =
///     [("scifi".to_string(), vec!["Neon cyberpunk".to_string()])].into_iter().collect();
/// let resolver = StyleResolver::new(ArtStyles::new(genres, OrderedMap::new()));
///
/// assert_eq!(resolver.resolve(Some("SciFi"), None), "Neon cyberpunk");
/// assert_eq!(resolver.resolve(None, None), DEFAULT_STYLE_PROMPT);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct StyleResolver {
    art_styles: ArtStyles,
}

impl StyleResolver {
    /// Create a resolver over a catalog.
    pub fn new(art_styles: ArtStyles) -> Self {
        Self { art_styles }
    }

    /// Create a resolver over the configured catalog.
    pub fn from_config(config: &StoryloomConfig) -> Self {
        Self::new(config.art_styles().clone())
    }

    /// Resolve a style prompt.
    ///
    /// A custom style name that exists in the catalog wins. Otherwise a genre
    /// that exists (case-insensitive) with at least one style yields its
    /// first style. Anything else yields [`DEFAULT_STYLE_PROMPT`].
    pub fn resolve(&self, genre: Option<&str>, custom_style: Option<&str>) -> String {
        if let Some(style) = custom_style.and_then(|name| self.art_styles.custom_style(name)) {
            debug!(custom_style = ?custom_style, "Resolved custom style");
            return style.to_string();
        }

        if let Some(style) = genre.and_then(|name| self.art_styles.genre_style(name)) {
            debug!(genre = ?genre, "Resolved genre style");
            return style.to_string();
        }

        debug!(?genre, ?custom_style, "No catalog match, using default style");
        DEFAULT_STYLE_PROMPT.to_string()
    }

    /// The first custom style in the catalog, if any.
    pub fn first_custom_style(&self) -> Option<&str> {
        self.art_styles.first_custom_style()
    }
}
