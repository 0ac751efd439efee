use thiserror::Error;

/// Largest image accepted for upload: 5 MB.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a valid image file.")]
    NotAnImage { mime: String },
    #[error("Image size should be less than 5MB.")]
    TooLarge { size: u64 },
}

/// Checks an image candidate before any preview is built or request is sent.
/// The MIME type is checked before the size.
pub fn validate_image(mime: &str, size: u64) -> Result<(), ValidationError> {
    if !mime.starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            mime: mime.to_string(),
        });
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge { size });
    }
    Ok(())
}
