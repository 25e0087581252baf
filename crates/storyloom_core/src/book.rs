//! Book types produced by the workflows.

use crate::Illustration;
use serde::{Deserialize, Serialize};

/// Narrative plus expanded chapters, as produced by the narrative workflow.
///
/// # Examples
///
/// ```
/// use storyloom_core::Book;
///
/// let book = Book::new("An outline", vec!["Chapter one prose".to_string()]);
/// assert_eq!(book.chapters().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Book {
    /// Raw narrative outline
    narrative: String,
    /// Expanded chapters in narrative order
    chapters: Vec<String>,
}

impl Book {
    /// Create a book.
    pub fn new(narrative: impl Into<String>, chapters: Vec<String>) -> Self {
        Self {
            narrative: narrative.into(),
            chapters,
        }
    }

    /// Split into narrative and chapters.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.narrative, self.chapters)
    }
}

/// One chapter with its illustration slot.
///
/// Exactly one of `illustration` and `illustration_error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct IllustratedChapter {
    /// One-based chapter number
    number: usize,
    /// Expanded chapter prose
    text: String,
    /// Rendered illustration
    #[serde(skip_serializing_if = "Option::is_none")]
    illustration: Option<Illustration>,
    /// Why the illustration is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    illustration_error: Option<String>,
}

impl IllustratedChapter {
    /// Chapter with a rendered illustration.
    pub fn illustrated(number: usize, text: impl Into<String>, illustration: Illustration) -> Self {
        Self {
            number,
            text: text.into(),
            illustration: Some(illustration),
            illustration_error: None,
        }
    }

    /// Chapter whose illustration failed.
    pub fn failed(number: usize, text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            illustration: None,
            illustration_error: Some(error.into()),
        }
    }
}

/// A finished book: narrative, resolved art style, and illustrated chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct IllustratedBook {
    /// Raw narrative outline
    narrative: String,
    /// Art style prompt used for every illustration
    art_style: String,
    /// Chapters paired with their illustrations
    chapters: Vec<IllustratedChapter>,
}

impl IllustratedBook {
    /// Assemble an illustrated book.
    pub fn new(
        narrative: impl Into<String>,
        art_style: impl Into<String>,
        chapters: Vec<IllustratedChapter>,
    ) -> Self {
        Self {
            narrative: narrative.into(),
            art_style: art_style.into(),
            chapters,
        }
    }

    /// Number of chapters that received an illustration.
    pub fn illustration_count(&self) -> usize {
        self.chapters
            .iter()
            .filter(|c| c.illustration.is_some())
            .count()
    }
}
