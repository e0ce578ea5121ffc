use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Largest accepted image: 10 MiB.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImageValidationError {
    #[error("unsupported image type {0}; only JPEG, PNG, WebP and GIF are allowed")]
    UnsupportedType(String),
    #[error("image is {size} bytes; the limit is {max} bytes (10 MiB)")]
    TooLarge { size: u64, max: u64 },
}

pub fn validate_image(content_type: &str, size: u64) -> Result<(), ImageValidationError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(ImageValidationError::UnsupportedType(content_type.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ImageValidationError::TooLarge {
            size,
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// MIME type for an image path, by extension (case-insensitive).
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// `{clean-stem}-{unix_millis}-{sha256[..7]}.{ext}`.
///
/// The stem keeps `[A-Za-z0-9_-]` (anything else becomes `-`) and is
/// lower-cased; a name without an extension is treated as `.jpg`.
pub fn generate_unique_file_name(original_name: &str, content: &[u8]) -> String {
    let (stem, extension) = match original_name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => (stem, ext),
        Some((stem, _)) => (stem, "jpg"),
        None => (original_name, "jpg"),
    };

    let clean: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let digest = hex::encode(Sha256::digest(content));

    format!("{}-{}-{}.{}", clean, millis, &digest[..7], extension)
}
