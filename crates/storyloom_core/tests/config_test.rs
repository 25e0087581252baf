use std::io::Write;
use storyloom_core::{
    DEFAULT_DIFFUSION_MODEL, DEFAULT_MAX_CHAPTERS, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL,
    DevicePreference, StoryloomConfig,
};
use storyloom_error::StoryloomErrorKind;

const SAMPLE: &str = r#"{
    "ollama": { "model": "mistral", "url": "http://localhost:11434" },
    "stable_diffusion": { "default_model": "runwayml/stable-diffusion-v1-5" },
    "generation_settings": { "max_chapters": 5 },
    "art_styles": {
        "genres": {
            "scifi": ["Neon cyberpunk", "Retro chrome"],
            "fantasy": ["Oil painting with golden light"]
        },
        "custom_styles": {
            "manga": "Bold black-and-white line art",
            "storybook": "Soft pastel gouache"
        }
    }
}"#;

fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn loads_all_sections_from_file() -> anyhow::Result<()> {
    let file = write_config(SAMPLE)?;
    let config = StoryloomConfig::from_file(file.path())?;

    assert_eq!(config.ollama().model(), "mistral");
    assert_eq!(
        config.stable_diffusion().default_model(),
        "runwayml/stable-diffusion-v1-5"
    );
    assert_eq!(*config.generation_settings().max_chapters(), 5);
    assert_eq!(config.genre_names(), vec!["scifi", "fantasy"]);
    assert_eq!(config.custom_style_names(), vec!["manga", "storybook"]);
    assert_eq!(
        config.art_styles().first_custom_style(),
        Some("Bold black-and-white line art")
    );
    Ok(())
}

#[test]
fn missing_keys_fall_back_to_defaults() -> anyhow::Result<()> {
    let config = StoryloomConfig::from_json(r#"{ "ollama": {} }"#)?;

    assert_eq!(config.ollama().model(), DEFAULT_OLLAMA_MODEL);
    assert_eq!(config.ollama().url(), DEFAULT_OLLAMA_URL);
    assert_eq!(
        config.stable_diffusion().default_model(),
        DEFAULT_DIFFUSION_MODEL
    );
    assert_eq!(*config.stable_diffusion().steps(), 50);
    assert_eq!(*config.stable_diffusion().device(), DevicePreference::Auto);
    assert_eq!(
        *config.generation_settings().max_chapters(),
        DEFAULT_MAX_CHAPTERS
    );
    assert!(config.genre_names().is_empty());
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let err = StoryloomConfig::from_file("/nonexistent/storyloom/config.json").unwrap_err();
    assert!(matches!(err.kind(), StoryloomErrorKind::Config(_)));
}

#[test]
fn malformed_document_is_a_config_error() -> anyhow::Result<()> {
    let file = write_config("{ \"ollama\": ")?;
    let err = StoryloomConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), StoryloomErrorKind::Config(_)));
    Ok(())
}

#[test]
fn wrong_shape_is_rejected() {
    let result = StoryloomConfig::from_json(r#"{ "art_styles": { "genres": { "scifi": "x" } } }"#);
    assert!(result.is_err());
}

#[test]
fn zero_steps_is_rejected_at_load() {
    let err = StoryloomConfig::from_json(r#"{ "stable_diffusion": { "steps": 0 } }"#).unwrap_err();
    assert!(matches!(err.kind(), StoryloomErrorKind::Config(_)));
    assert!(err.to_string().contains("stable_diffusion.steps"));
}

#[test]
fn large_step_counts_load_unchanged() -> anyhow::Result<()> {
    let config = StoryloomConfig::from_json(r#"{ "stable_diffusion": { "steps": 200 } }"#)?;
    assert_eq!(*config.stable_diffusion().steps(), 200);
    Ok(())
}
