//! End-to-end book generation through the facade with scripted backends.

use std::io::Write;
use std::sync::Arc;
use storyloom::testing::{MockImageSynthesis, MockTextCompletion};
use storyloom::{
    BookRequestBuilder, BookStudio, IllustratedBook, StoryloomConfig, encode_base64, render_book,
};

const CONFIG: &str = r#"{
    "ollama": { "model": "llama2", "url": "http://localhost:11434" },
    "stable_diffusion": { "default_model": "stabilityai/stable-diffusion-xl-base-1.0" },
    "generation_settings": { "max_chapters": 10 },
    "art_styles": {
        "genres": {
            "scifi": ["Futuristic digital art with neon accents"],
            "fantasy": ["Epic oil painting"]
        },
        "custom_styles": {
            "watercolor": "Delicate watercolor with paper texture"
        }
    }
}"#;

const THREE_PARAGRAPHS: &str = "A programmer boots an old machine.\n\n\
                                The machine remembers her grandmother.\n\n\
                                Together they finish the last program.";

fn load_config() -> anyhow::Result<Arc<StoryloomConfig>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(CONFIG.as_bytes())?;
    Ok(Arc::new(StoryloomConfig::from_file(file.path())?))
}

#[tokio::test]
async fn test_scifi_book_from_config_file() -> anyhow::Result<()> {
    let text = MockTextCompletion::new_fixed(THREE_PARAGRAPHS);
    let image = MockImageSynthesis::new();
    let studio = BookStudio::new(load_config()?, text, image.clone());

    let request = BookRequestBuilder::default()
        .description("test")
        .genre("scifi")
        .build()?;
    let book = studio.create_book(request).await?;

    assert_eq!(book.narrative(), THREE_PARAGRAPHS);
    assert_eq!(book.art_style(), "Futuristic digital art with neon accents");
    assert_eq!(book.chapters().len(), 3);
    assert_eq!(book.illustration_count(), 3);
    assert_eq!(image.call_count(), 3);

    let numbers: Vec<usize> = book.chapters().iter().map(|c| *c.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_book_json_carries_base64_images() -> anyhow::Result<()> {
    let studio = BookStudio::new(
        load_config()?,
        MockTextCompletion::new_fixed(THREE_PARAGRAPHS),
        MockImageSynthesis::new(),
    );
    let request = BookRequestBuilder::default()
        .description("test")
        .custom_style("watercolor")
        .build()?;
    let book = studio.create_book(request).await?;

    let json = serde_json::to_value(&book)?;
    let first = book.chapters()[0]
        .illustration()
        .as_ref()
        .expect("illustrated");
    assert_eq!(
        json["chapters"][0]["illustration"]["data"],
        encode_base64(first)
    );

    let restored: IllustratedBook = serde_json::from_value(json)?;
    assert_eq!(restored, book);
    Ok(())
}

#[tokio::test]
async fn test_rendered_book_pairs_chapters_and_images() -> anyhow::Result<()> {
    let studio = BookStudio::new(
        load_config()?,
        MockTextCompletion::new_fixed(THREE_PARAGRAPHS),
        MockImageSynthesis::new(),
    );
    let request = BookRequestBuilder::default()
        .description("test")
        .genre("fantasy")
        .build()?;
    let html = render_book(&studio.create_book(request).await?);

    for n in 1..=3 {
        assert!(html.contains(&format!("<h3>Chapter {n}</h3>")));
        assert!(html.contains(&format!("alt=\"Chapter {n} Illustration\"")));
    }
    Ok(())
}
