use miette::Diagnostic;
use thiserror::Error;

/// Main error type for imgset operations
#[derive(Error, Diagnostic, Debug)]
pub enum ImgsetError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(imgset::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Pattern error: {message}")]
    #[diagnostic(code(imgset::pattern))]
    Pattern {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(imgset::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Task error: {message}")]
    #[diagnostic(code(imgset::task))]
    Task { message: String },
}

impl ImgsetError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<std::path::PathBuf>, context: &str, err: std::io::Error) -> Self {
        ImgsetError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImgsetError>;
