//! HTTP routes.

use crate::{BookStudio, render_book, render_error, render_form};
use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use std::sync::Arc;
use storyloom_core::{BookRequestBuilder, ReferenceImage};
use storyloom_error::{
    IllustrationErrorKind, ServerError, ServerErrorKind, StoryloomError, StoryloomErrorKind,
};
use storyloom_illustration::validate_reference;
use storyloom_interface::{ImageSynthesis, TextCompletion};
use tracing::{debug, error, instrument, warn};

/// Largest accepted form submission, reference image included.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Build the router for a studio.
pub fn create_router<T, I>(studio: Arc<BookStudio<T, I>>) -> Router
where
    T: TextCompletion + 'static,
    I: ImageSynthesis + 'static,
{
    Router::new()
        .route("/", get(index::<T, I>))
        .route("/books", post(create_book::<T, I>))
        .route("/health", get(health::<T, I>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(studio)
}

/// The book form.
async fn index<T, I>(State(studio): State<Arc<BookStudio<T, I>>>) -> Html<String>
where
    T: TextCompletion + 'static,
    I: ImageSynthesis + 'static,
{
    let config = studio.config();
    Html(render_form(&config.genre_names(), &config.custom_style_names()))
}

/// Health check with backend details.
async fn health<T, I>(State(studio): State<Arc<BookStudio<T, I>>>) -> impl IntoResponse
where
    T: TextCompletion + 'static,
    I: ImageSynthesis + 'static,
{
    (StatusCode::OK, Json(studio.status()))
}

/// Generate a book from a multipart form submission.
///
/// Renders HTML unless the client asks for `application/json`.
#[instrument(skip_all)]
async fn create_book<T, I>(
    State(studio): State<Arc<BookStudio<T, I>>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response
where
    T: TextCompletion + 'static,
    I: ImageSynthesis + 'static,
{
    let wants_json = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));

    let result = match parse_form(multipart).await {
        Ok(request) => studio.create_book(request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(book) if wants_json => Json(book).into_response(),
        Ok(book) => Html(render_book(&book)).into_response(),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!(error = %e, "Book generation failed");
            } else {
                warn!(error = %e, "Rejected book request");
            }
            if wants_json {
                (
                    status,
                    Json(serde_json::json!({ "error": e.to_string() })),
                )
                    .into_response()
            } else {
                (status, Html(render_error(&e.to_string()))).into_response()
            }
        }
    }
}

async fn parse_form(mut multipart: Multipart) -> Result<storyloom_core::BookRequest, StoryloomError> {
    let mut builder = BookRequestBuilder::default();
    let mut description = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "description" => description = Some(field.text().await.map_err(invalid_form)?),
            "genre" => {
                let genre = field.text().await.map_err(invalid_form)?;
                if !genre.trim().is_empty() {
                    builder.genre(genre);
                }
            }
            "custom_style" => {
                let style = field.text().await.map_err(invalid_form)?;
                if !style.trim().is_empty() {
                    builder.custom_style(style);
                }
            }
            "reference" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(invalid_form)?;
                // Browsers send an empty part when no file was chosen.
                if !file_name.is_empty() && !data.is_empty() {
                    debug!(%file_name, bytes = data.len(), "Received reference image");
                    let upload = ReferenceImage::Upload {
                        file_name,
                        data: data.to_vec(),
                    };
                    // The form only offers png/jpg/jpeg; reject anything else here.
                    validate_reference(&upload).await?;
                    builder.reference_image(upload);
                }
            }
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    builder.description(description.unwrap_or_default());
    builder.build().map_err(|e| {
        ServerError::new(ServerErrorKind::InvalidForm(e.to_string())).into()
    })
}

fn invalid_form(e: axum::extract::multipart::MultipartError) -> StoryloomError {
    ServerError::new(ServerErrorKind::InvalidForm(e.to_string())).into()
}

fn status_for(err: &StoryloomError) -> StatusCode {
    match err.kind() {
        StoryloomErrorKind::Server(e) => match e.kind {
            ServerErrorKind::InvalidForm(_) => StatusCode::BAD_REQUEST,
            ServerErrorKind::PipelineUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
        StoryloomErrorKind::Illustration(e) => match e.kind {
            IllustrationErrorKind::UnsupportedReference(_)
            | IllustrationErrorKind::ReferenceRead(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_GATEWAY,
        },
        StoryloomErrorKind::Narrative(_) | StoryloomErrorKind::Models(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
