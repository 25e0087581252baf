//! Prompt templates sent to the text backend.

/// Prompt asking for a story outline.
pub fn outline_prompt(description: &str, art_style: &str) -> String {
    format!(
        "Create a book narrative based on:\n\
         - User Description: {description}\n\
         - Art Style: {art_style}\n\
         \n\
         Generate a compelling story outline with:\n\
         1. Main Characters\n\
         2. Plot Structure\n\
         3. Thematic Elements\n"
    )
}

/// Prompt asking for one chapter fragment to be expanded into prose.
pub fn expansion_prompt(fragment: &str) -> String {
    format!(
        "Expand this chapter outline into a detailed narrative:\n\
         {fragment}\n\
         \n\
         Add rich descriptions, dialogue, and character development.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_embeds_inputs_and_three_point_request() {
        let prompt = outline_prompt("A lighthouse keeper", "Ink wash");
        assert!(prompt.contains("- User Description: A lighthouse keeper"));
        assert!(prompt.contains("- Art Style: Ink wash"));
        assert!(prompt.contains("1. Main Characters"));
        assert!(prompt.contains("2. Plot Structure"));
        assert!(prompt.contains("3. Thematic Elements"));
    }

    #[test]
    fn expansion_embeds_fragment_verbatim() {
        let prompt = expansion_prompt("The storm arrives.\nThe lamp fails.");
        assert!(prompt.contains("The storm arrives.\nThe lamp fails."));
        assert!(prompt.ends_with("character development.\n"));
    }
}
