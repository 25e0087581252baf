//! Tests for the narrative workflow against scripted backends.

use storyloom_interface::testing::{MockResponse, MockTextCompletion};
use storyloom_narrative::{NarrativeWorkflow, StyleResolver, split_into_chapters};
use storyloom_error::{NarrativeErrorKind, StoryloomErrorKind};

const THREE_PARAGRAPHS: &str = "Ada finds a strange terminal.\n\n\
                                The terminal speaks back.\n\n\
                                Together they rewrite the city.";

fn numbered_blocks(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Block {}", i))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[test]
fn test_three_blocks_under_cap() {
    let chapters = split_into_chapters(THREE_PARAGRAPHS, 10);
    assert_eq!(
        chapters,
        vec![
            "Ada finds a strange terminal.",
            "The terminal speaks back.",
            "Together they rewrite the city."
        ]
    );
}

#[test]
fn test_fifteen_blocks_truncate_to_first_ten() {
    let chapters = split_into_chapters(&numbered_blocks(15), 10);
    assert_eq!(chapters.len(), 10);
    assert_eq!(chapters.first().map(String::as_str), Some("Block 1"));
    assert_eq!(chapters.last().map(String::as_str), Some("Block 10"));
}

#[test]
fn test_no_blank_lines_is_one_chapter() {
    let text = "One long outline\nwith several lines\nbut no breaks.";
    assert_eq!(split_into_chapters(text, 10), vec![text]);
}

#[test]
fn test_empty_and_whitespace_narratives_have_no_chapters() {
    assert!(split_into_chapters("", 10).is_empty());
    assert!(split_into_chapters("\n\n   \n\t\n", 10).is_empty());
}

#[tokio::test]
async fn test_generate_book_outline_then_expansions() -> anyhow::Result<()> {
    let mock = MockTextCompletion::new_sequence(vec![
        MockResponse::Success(THREE_PARAGRAPHS.to_string()),
        MockResponse::Success("Chapter one prose".to_string()),
        MockResponse::Success("Chapter two prose".to_string()),
        MockResponse::Success("Chapter three prose".to_string()),
    ]);
    let workflow = NarrativeWorkflow::new(mock.clone(), 10, StyleResolver::default());

    let book = workflow.generate_book("test", "Neon cyberpunk").await?;

    assert_eq!(book.narrative(), THREE_PARAGRAPHS);
    assert_eq!(
        book.chapters(),
        &vec![
            "Chapter one prose".to_string(),
            "Chapter two prose".to_string(),
            "Chapter three prose".to_string()
        ]
    );

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 4);
    assert!(prompts[0].contains("- User Description: test"));
    assert!(prompts[0].contains("- Art Style: Neon cyberpunk"));
    assert!(prompts[1].contains("Ada finds a strange terminal."));
    assert!(prompts[3].contains("Together they rewrite the city."));
    Ok(())
}

#[tokio::test]
async fn test_chapter_cap_bounds_expansion_calls() -> anyhow::Result<()> {
    let mock = MockTextCompletion::new_fixed(numbered_blocks(6));
    let workflow = NarrativeWorkflow::new(mock.clone(), 4, StyleResolver::default());

    let book = workflow.generate_book("test", "style").await?;

    assert_eq!(book.chapters().len(), 4);
    assert_eq!(mock.call_count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_empty_outline_yields_empty_book() -> anyhow::Result<()> {
    let mock = MockTextCompletion::new_fixed("");
    let workflow = NarrativeWorkflow::with_defaults(mock.clone());

    let book = workflow.generate_book("test", "style").await?;

    assert!(book.chapters().is_empty());
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_outline_failure_aborts() {
    let mock = MockTextCompletion::new_sequence(vec![MockResponse::Error(
        "connection refused".to_string(),
    )]);
    let workflow = NarrativeWorkflow::with_defaults(mock);

    let err = workflow.generate_book("test", "style").await.unwrap_err();
    match err.kind() {
        StoryloomErrorKind::Narrative(e) => {
            assert!(matches!(e.kind, NarrativeErrorKind::OutlineFailed(_)))
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_expansion_failure_names_chapter() {
    let mock = MockTextCompletion::new_sequence(vec![
        MockResponse::Success(THREE_PARAGRAPHS.to_string()),
        MockResponse::Success("fine".to_string()),
        MockResponse::Error("timeout".to_string()),
    ]);
    let workflow = NarrativeWorkflow::with_defaults(mock);

    let err = workflow.generate_book("test", "style").await.unwrap_err();
    match err.kind() {
        StoryloomErrorKind::Narrative(e) => assert!(matches!(
            e.kind,
            NarrativeErrorKind::ExpansionFailed { chapter: 2, .. }
        )),
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_blank_expansion_is_kept_in_place() -> anyhow::Result<()> {
    let mock = MockTextCompletion::new_sequence(vec![
        MockResponse::Success("One\n\nTwo\n\nThree".to_string()),
        MockResponse::Success("prose 1".to_string()),
        MockResponse::Success(String::new()),
        MockResponse::Success("prose 3".to_string()),
    ]);
    let workflow = NarrativeWorkflow::with_defaults(mock.clone());

    let book = workflow.generate_book("test", "style").await?;
    assert_eq!(book.narrative(), "One\n\nTwo\n\nThree");
    assert_eq!(book.chapters(), &vec!["prose 1", "", "prose 3"]);
    assert_eq!(mock.call_count(), 4);
    Ok(())
}
