//! Error types for wikidown library.

use std::io;
use thiserror::Error;

/// Result type alias for wikidown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or maintaining thumbnails.
///
/// Rendering itself never fails: thumbnail errors are logged and the
/// affected image line degrades to its untouched `src`. These variants
/// surface from the lower-level collaborators and from file/JSON helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source image could not be decoded.
    #[error("Image decoding error: {0}")]
    ImageDecode(String),

    /// The thumbnail could not be encoded.
    #[error("Image encoding error: {0}")]
    ImageEncode(String),

    /// Error while preparing a thumbnail.
    #[error("Thumbnail error: {0}")]
    Thumbnail(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A table of contents section had no title.
    #[error("Invalid TOC section: {0}")]
    InvalidSection(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            image::ImageError::Encoding(_) => Error::ImageEncode(err.to_string()),
            _ => Error::ImageDecode(err.to_string()),
        }
    }
}
