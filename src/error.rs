use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the tracing core: configuration and presentation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("orthographic plane height must be positive, got {0}")]
    InvalidPlaneHeight(f64),

    #[error("failed to write {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("window error: {0}")]
    Window(String),

    #[error("this build has no window support; rebuild with `--features window`")]
    WindowUnavailable,
}
