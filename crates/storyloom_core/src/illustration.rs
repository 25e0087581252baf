//! Rendered illustration type.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// MIME type produced by the diffusion backend.
pub const PNG_MIME: &str = "image/png";

/// One rendered raster image.
///
/// Illustrations carry no stable identifier; a book pairs them with chapters
/// by position.
///
/// # Examples
///
/// ```
/// use storyloom_core::Illustration;
///
/// let image = Illustration::png(vec![0x89, 0x50, 0x4E, 0x47], "a lighthouse");
/// assert_eq!(image.to_base64(), "iVBORw==");
/// assert!(image.data_uri().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Illustration {
    /// MIME type of `data`
    mime: String,
    /// Encoded image bytes
    #[serde(with = "base64_bytes")]
    data: Vec<u8>,
    /// Prompt that produced the image
    prompt: String,
}

impl Illustration {
    /// Create an illustration from encoded bytes.
    pub fn new(mime: impl Into<String>, data: Vec<u8>, prompt: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data,
            prompt: prompt.into(),
        }
    }

    /// Create a PNG illustration.
    pub fn png(data: Vec<u8>, prompt: impl Into<String>) -> Self {
        Self::new(PNG_MIME, data, prompt)
    }

    /// Base64 transport encoding of the image bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// `data:` URI suitable for an `<img src>` attribute.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.to_base64())
    }

    /// Consume the illustration and return the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
