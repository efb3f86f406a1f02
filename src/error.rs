use thiserror::Error;
use trellis_style::StyleError;
use trellis_view::ViewError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("View error: {0}")]
    View(#[from] ViewError),

    #[error("A logger was already installed")]
    LoggerAlreadySet,
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
