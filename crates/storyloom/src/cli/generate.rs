//! `generate` command handler.

use super::backends::{image_backend, text_backend};
use std::path::PathBuf;
use std::sync::Arc;
use storyloom_core::{
    BookRequest, BookRequestBuilder, BookRequestBuilderError, ReferenceImage, StoryloomConfig,
};
use storyloom_error::{
    OutputError, OutputErrorKind, RequestError, RequestErrorKind, StoryloomResult,
};
use storyloom_server::BookStudio;
use tracing::info;

/// Selections made on the command line.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Book concept
    pub description: String,
    /// Genre name
    pub genre: Option<String>,
    /// Custom style name
    pub style: Option<String>,
    /// Reference image path
    pub reference: Option<PathBuf>,
    /// Output file for the book JSON
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    fn to_request(&self) -> StoryloomResult<BookRequest> {
        let mut builder = BookRequestBuilder::default();
        builder.description(self.description.clone());
        if let Some(genre) = &self.genre {
            builder.genre(genre.clone());
        }
        if let Some(style) = &self.style {
            builder.custom_style(style.clone());
        }
        if let Some(path) = &self.reference {
            builder.reference_image(ReferenceImage::Path(path.clone()));
        }
        builder.build().map_err(|e| {
            let kind = match e {
                BookRequestBuilderError::UninitializedField(field) => {
                    RequestErrorKind::MissingField(field.to_string())
                }
                BookRequestBuilderError::ValidationError(message) => {
                    RequestErrorKind::Invalid(message)
                }
                other => RequestErrorKind::Invalid(other.to_string()),
            };
            RequestError::new(kind).into()
        })
    }
}

/// Handle the `generate` command
pub async fn handle_generate(config: StoryloomConfig, args: GenerateArgs) -> StoryloomResult<()> {
    let request = args.to_request()?;

    let text = text_backend(&config).await?;
    let image = image_backend(&config).await?;
    let studio = BookStudio::new(Arc::new(config), text, image);

    let book = studio.create_book(request).await?;
    let json = serde_json::to_string_pretty(&book)
        .map_err(|e| OutputError::new(OutputErrorKind::Serialize(e.to_string())))?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json).await.map_err(|e| {
                OutputError::new(OutputErrorKind::Write {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            })?;
            info!(
                path = %path.display(),
                chapters = book.chapters().len(),
                illustrations = book.illustration_count(),
                "Book written"
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
