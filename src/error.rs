use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to save image {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}
