use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gradia operations
#[derive(Error, Diagnostic, Debug)]
pub enum GradiaError {
    #[error("Invalid colour: {value}")]
    #[diagnostic(code(gradia::colour))]
    InvalidColor {
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(gradia::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gradia::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gradia::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(gradia::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(gradia::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl GradiaError {
    /// Shorthand for an `InvalidColor` error with the standard format hint.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            help: Some("Use a 6-digit hex colour like #9b87f5".to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GradiaError>;
