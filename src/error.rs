use std::io;
use thiserror::Error;

/// Failures outside the reading core: terminal setup and logging.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
