use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscribeError>;

/// Errors raised while validating, transcribing or exporting audio
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("audio file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported file type: {extension}. Supported types: {}", .supported.join(", "))]
    UnsupportedExtension {
        extension: String,
        supported: Vec<String>,
    },

    #[error("audio file exceeds {limit_mb} MB limit. Current size: {size_mb:.2} MB")]
    FileTooLarge { size_mb: f64, limit_mb: f64 },

    #[error(
        "audio file too short. Minimum length is {minimum} seconds. Current length: {duration:.2} seconds"
    )]
    FileTooShort { duration: f64, minimum: f64 },

    #[error("unsupported format: {format}. Choose from: {}", .supported.join(", "))]
    UnsupportedFormat {
        format: String,
        supported: Vec<String>,
    },

    #[error("unsupported model: {model}. Choose from: {}", .supported.join(", "))]
    UnsupportedModel {
        model: String,
        supported: Vec<String>,
    },

    #[error("Groq API key is required. Set GROQ_API_KEY or pass it explicitly")]
    MissingCredential,

    #[error("failed to send request to Groq API: {0}")]
    Network(#[source] reqwest::Error),

    #[error("transcription request failed: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("malformed transcription response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TranscribeError {
    /// True for the errors produced by file validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound(_)
                | Self::UnsupportedExtension { .. }
                | Self::FileTooLarge { .. }
                | Self::FileTooShort { .. }
        )
    }
}
