//! Error types for text-to-image conversion
//!
//! The `Display` text of every variant is the message shown to the user when
//! a conversion fails, so the wording of the first three variants is fixed.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a text file to an image
#[derive(Error, Debug)]
pub enum Error {
    /// Convert was requested before any input file was chosen
    #[error("No text file chosen.")]
    NoInputSelected,

    /// The save dialog was dismissed without a destination
    #[error("Image save operation canceled.")]
    SaveCanceled,

    /// Reading the input or writing the output failed
    #[error("An error occurred while converting the text to image: {0}")]
    Io(#[from] std::io::Error),

    /// The computed canvas cannot be allocated
    #[error(
        "An error occurred while converting the text to image: invalid canvas dimensions {width}x{height} for {line_count} line(s)"
    )]
    InvalidDimensions {
        width: i64,
        height: i64,
        line_count: usize,
    },

    /// No monospace font could be located on this system
    #[error("An error occurred while converting the text to image: no monospace font available ({0})")]
    FontUnavailable(String),

    /// A font file was found but could not be parsed
    #[error("An error occurred while converting the text to image: invalid font data in {0}")]
    InvalidFont(String),

    /// PNG encoding failed
    #[error("An error occurred while converting the text to image: {0}")]
    Encode(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Encode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_match_dialog_text() {
        assert_eq!(Error::NoInputSelected.to_string(), "No text file chosen.");
        assert_eq!(Error::SaveCanceled.to_string(), "Image save operation canceled.");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt (No such file)");
        assert_eq!(
            Error::from(io).to_string(),
            "An error occurred while converting the text to image: missing.txt (No such file)"
        );
    }

    #[test]
    fn invalid_dimensions_reports_size() {
        let e = Error::InvalidDimensions {
            width: 52,
            height: 20,
            line_count: 1,
        };
        assert!(e.to_string().contains("52x20"));
        assert!(e.to_string().contains("1 line(s)"));
    }
}
