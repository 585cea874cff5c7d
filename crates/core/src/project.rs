//! Portfolio project rules: placeholder derivation and inline image encoding.
//!
//! Project images are not stored as files. An upload is inlined into the row
//! as a `data:` URI, so its size is bounded by what a text column should
//! reasonably hold.

use base64::Engine;
use image::ImageFormat;

use crate::error::CoreError;

/// Default upper bound on an uploaded image, before base64 expansion.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// A project without an image is rendered as a placeholder card.
pub fn is_placeholder(image_url: Option<&str>) -> bool {
    image_url.map_or(true, |url| url.trim().is_empty())
}

/// Collapse a blank image URL to `None`.
pub fn normalize_image_url(image_url: Option<String>) -> Option<String> {
    image_url.filter(|url| !url.trim().is_empty())
}

/// Accept only inline images or absolute http(s) URLs.
pub fn validate_image_url(image_url: &str) -> Result<(), CoreError> {
    let ok = image_url.starts_with("data:image/")
        || image_url.starts_with("https://")
        || image_url.starts_with("http://");
    if !ok {
        return Err(CoreError::Validation(
            "imageUrl must be a data:image URI or an http(s) URL".into(),
        ));
    }
    Ok(())
}

/// Sniff the image format from its bytes and inline it as a `data:` URI.
pub fn encode_image_data_uri(bytes: &[u8], max_bytes: usize) -> Result<String, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Image file is empty".into()));
    }
    if bytes.len() > max_bytes {
        return Err(CoreError::Validation(format!(
            "Image is {} bytes, the limit is {max_bytes}",
            bytes.len()
        )));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("File is not a recognised image".into()))?;
    let mime = match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Gif => "image/gif",
        other => {
            return Err(CoreError::Validation(format!(
                "Unsupported image format: {other:?}"
            )))
        }
    };

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{mime};base64,{encoded}"))
}
