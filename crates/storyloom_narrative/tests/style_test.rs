//! Tests for art-style resolution.

use storyloom_core::StoryloomConfig;
use storyloom_narrative::{DEFAULT_STYLE_PROMPT, StyleResolver};

const CATALOG: &str = r#"{
    "art_styles": {
        "genres": {
            "scifi": ["Neon cyberpunk digital painting", "Retro pulp cover"],
            "Fantasy": ["Storybook gouache"],
            "noir": []
        },
        "custom_styles": {
            "manga": "Bold black-and-white manga line art",
            "storybook": "Soft pastel children's storybook"
        }
    }
}"#;

fn resolver() -> anyhow::Result<StyleResolver> {
    let config = StoryloomConfig::from_json(CATALOG)?;
    Ok(StyleResolver::from_config(&config))
}

#[test]
fn test_custom_style_wins_over_genre() -> anyhow::Result<()> {
    let resolver = resolver()?;
    assert_eq!(
        resolver.resolve(Some("scifi"), Some("manga")),
        "Bold black-and-white manga line art"
    );
    Ok(())
}

#[test]
fn test_unknown_custom_style_falls_through_to_genre() -> anyhow::Result<()> {
    let resolver = resolver()?;
    assert_eq!(
        resolver.resolve(Some("scifi"), Some("None")),
        "Neon cyberpunk digital painting"
    );
    Ok(())
}

#[test]
fn test_genre_matches_case_insensitively() -> anyhow::Result<()> {
    let resolver = resolver()?;
    assert_eq!(resolver.resolve(Some("SCIFI"), None), "Neon cyberpunk digital painting");
    assert_eq!(resolver.resolve(Some("fantasy"), None), "Storybook gouache");
    Ok(())
}

#[test]
fn test_custom_style_match_is_exact() -> anyhow::Result<()> {
    let resolver = resolver()?;
    assert_eq!(resolver.resolve(None, Some("Manga")), DEFAULT_STYLE_PROMPT);
    Ok(())
}

#[test]
fn test_fallthrough_to_default() -> anyhow::Result<()> {
    let resolver = resolver()?;
    assert_eq!(resolver.resolve(None, None), DEFAULT_STYLE_PROMPT);
    assert_eq!(resolver.resolve(Some("western"), None), DEFAULT_STYLE_PROMPT);
    assert_eq!(resolver.resolve(Some("noir"), None), DEFAULT_STYLE_PROMPT);
    Ok(())
}

#[test]
fn test_resolution_is_idempotent() -> anyhow::Result<()> {
    let resolver = resolver()?;
    let first = resolver.resolve(Some("scifi"), Some("storybook"));
    let second = resolver.resolve(Some("scifi"), Some("storybook"));
    assert_eq!(first, second);
    assert_eq!(resolver.first_custom_style(), Some("Bold black-and-white manga line art"));
    Ok(())
}
