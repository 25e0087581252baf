//! Reference image checks.

use storyloom_core::ReferenceImage;
use storyloom_error::{IllustrationError, IllustrationErrorKind, StoryloomResult};
use tracing::debug;

/// File extensions accepted for reference images.
pub const SUPPORTED_REFERENCE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Check that a reference image has a supported type and can be read.
///
/// Path references must point at an existing regular file; uploads must be
/// non-empty.
pub async fn validate_reference(reference: &ReferenceImage) -> StoryloomResult<()> {
    let extension = reference.extension().unwrap_or_default();
    if !SUPPORTED_REFERENCE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(IllustrationError::new(IllustrationErrorKind::UnsupportedReference(
            reference.file_name(),
        ))
        .into());
    }

    match reference {
        ReferenceImage::Path(path) => {
            let metadata = tokio::fs::metadata(path).await.map_err(|e| {
                IllustrationError::new(IllustrationErrorKind::ReferenceRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            if !metadata.is_file() {
                return Err(IllustrationError::new(IllustrationErrorKind::ReferenceRead(
                    format!("{} is not a file", path.display()),
                ))
                .into());
            }
            debug!(path = %path.display(), bytes = metadata.len(), "Reference image found");
        }
        ReferenceImage::Upload { file_name, data } => {
            if data.is_empty() {
                return Err(IllustrationError::new(IllustrationErrorKind::ReferenceRead(
                    format!("{} is empty", file_name),
                ))
                .into());
            }
            debug!(%file_name, bytes = data.len(), "Reference image uploaded");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn gif_upload_is_unsupported() {
        let reference = ReferenceImage::Upload {
            file_name: "cat.gif".to_string(),
            data: vec![1, 2, 3],
        };
        let err = validate_reference(&reference).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported reference image type: cat.gif"));
    }

    #[tokio::test]
    async fn uppercase_extension_is_accepted() {
        let reference = ReferenceImage::Upload {
            file_name: "PHOTO.JPG".to_string(),
            data: vec![0xFF, 0xD8],
        };
        assert!(validate_reference(&reference).await.is_ok());
    }

    #[tokio::test]
    async fn empty_upload_is_unreadable() {
        let reference = ReferenceImage::Upload {
            file_name: "photo.png".to_string(),
            data: Vec::new(),
        };
        let err = validate_reference(&reference).await.unwrap_err();
        assert!(err.to_string().contains("photo.png is empty"));
    }
}
