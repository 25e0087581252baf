//! Illustration prompt composition.

/// Characters of chapter text quoted in a chapter prompt.
pub const CHAPTER_EXCERPT_CHARS: usize = 50;

/// Prompt for a chapter illustration: an excerpt of the chapter followed by
/// the art style.
///
/// # Examples
///
/// ```
/// use storyloom_illustration::chapter_prompt;
///
/// let prompt = chapter_prompt("The lighthouse stood alone.", "Ink wash");
/// assert_eq!(
///     prompt,
///     "Illustration for chapter about The lighthouse stood alone...., Ink wash"
/// );
/// ```
pub fn chapter_prompt(chapter: &str, art_style: &str) -> String {
    let excerpt: String = chapter.chars().take(CHAPTER_EXCERPT_CHARS).collect();
    format!("Illustration for chapter about {excerpt}..., {art_style}")
}

/// Prompt for the standalone scene rendered by `storyloom illustrate`.
pub fn scene_prompt(art_style: &str) -> String {
    format!("A magical scene in {art_style} style")
}
