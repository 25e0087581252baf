//! Chapter splitting.

/// Split a narrative into at most `max_chapters` chapter fragments.
///
/// Fragments are separated by one or more blank lines; a line holding only
/// whitespace counts as blank. Fragments are trimmed and empty ones dropped,
/// so an empty narrative yields no chapters. A narrative without blank lines
/// is a single chapter.
///
/// # Examples
///
/// ```
/// use storyloom_narrative::split_into_chapters;
///
/// let chapters = split_into_chapters("One.\n\nTwo.\n  \nThree.", 2);
/// assert_eq!(chapters, vec!["One.", "Two."]);
/// ```
pub fn split_into_chapters(narrative: &str, max_chapters: usize) -> Vec<String> {
    let mut chapters = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in narrative.lines() {
        if line.trim().is_empty() {
            push_fragment(&mut chapters, &mut current);
        } else {
            current.push(line);
        }
    }
    push_fragment(&mut chapters, &mut current);

    chapters.truncate(max_chapters);
    chapters
}

fn push_fragment(chapters: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let fragment = current.join("\n");
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        chapters.push(fragment.to_string());
    }
    current.clear();
}
