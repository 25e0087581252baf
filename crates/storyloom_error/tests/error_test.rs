use storyloom_error::{
    ConfigError, ConfigErrorKind, IllustrationError, IllustrationErrorKind, NarrativeError, NarrativeErrorKind,
    StoryloomError, StoryloomErrorKind,
};

#[test]
fn config_error_converts_into_top_level_kind() {
    let err: StoryloomError = ConfigError::new(ConfigErrorKind::Read {
        path: "config.json".to_string(),
        reason: "missing file".to_string(),
    })
    .into();
    assert!(matches!(err.kind(), StoryloomErrorKind::Config(_)));
    assert!(err.to_string().contains("config.json"));
    assert!(err.to_string().contains("missing file"));
}

#[test]
fn invalid_value_names_key_and_value() {
    let err = ConfigError::invalid_value("stable_diffusion.steps", "lots", "not a number");
    let text = err.to_string();
    assert!(text.contains("stable_diffusion.steps"));
    assert!(text.contains("'lots'"));
}

#[test]
fn errors_capture_caller_location() {
    let err = NarrativeError::new(NarrativeErrorKind::OutlineFailed("refused".to_string()));
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn expansion_failure_names_the_chapter() {
    let err = NarrativeError::new(NarrativeErrorKind::ExpansionFailed {
        chapter: 3,
        message: "connection reset".to_string(),
    });
    let text = err.to_string();
    assert!(text.contains("chapter 3"));
    assert!(text.contains("connection reset"));
}

#[test]
fn zero_steps_reports_minimum() {
    let err = IllustrationError::new(IllustrationErrorKind::InvalidSteps(0));
    assert!(err.to_string().contains("Invalid step count 0: must be at least 1"));
}
