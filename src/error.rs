use std::path::PathBuf;

use crate::image::Size;

/// Errors that can occur while converting to or from .SPC.
#[derive(Debug, thiserror::Error)]
pub enum SpcError {
    #[error("Cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("Invalid canvas dimensions: expected {expected}, got {actual}")]
    InvalidDimensions { expected: Size, actual: Size },

    #[error("Invalid .spc length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gamma {0}, expected a finite positive number")]
    InvalidGamma(f32),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
}

impl SpcError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpcError::Write {
            path: path.into(),
            source,
        }
    }

    /// Encoder failures surface as write errors, keeping the io cause when there is one.
    pub(crate) fn encode(path: impl Into<PathBuf>, err: ::image::ImageError) -> Self {
        let source = match err {
            ::image::ImageError::IoError(e) => e,
            ::image::ImageError::Unsupported(e) => {
                return SpcError::UnsupportedFormat(e.to_string());
            }
            other => std::io::Error::new(std::io::ErrorKind::Other, other),
        };
        SpcError::write(path, source)
    }
}

pub type Result<T> = std::result::Result<T, SpcError>;
