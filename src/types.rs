use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TranscribeError;

/// Whisper models served by the Groq transcription endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Model {
    #[value(name = "whisper-large-v3-turbo")]
    WhisperLargeV3Turbo,
    #[value(name = "distil-whisper-large-v3-en")]
    DistilWhisperLargeV3En,
    #[default]
    #[value(name = "whisper-large-v3")]
    WhisperLargeV3,
}

impl Model {
    pub const ALL: [Model; 3] = [
        Model::WhisperLargeV3Turbo,
        Model::DistilWhisperLargeV3En,
        Model::WhisperLargeV3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::WhisperLargeV3Turbo => "whisper-large-v3-turbo",
            Model::DistilWhisperLargeV3En => "distil-whisper-large-v3-en",
            Model::WhisperLargeV3 => "whisper-large-v3",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = TranscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| TranscribeError::UnsupportedModel {
                model: s.to_string(),
                supported: Model::ALL.iter().map(|m| m.as_str().to_string()).collect(),
            })
    }
}

/// Shape of the body requested from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResponseFormat {
    Json,
    #[default]
    #[value(name = "verbose_json")]
    VerboseJson,
    Text,
}

impl ResponseFormat {
    pub const ALL: [ResponseFormat; 3] = [
        ResponseFormat::Json,
        ResponseFormat::VerboseJson,
        ResponseFormat::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::VerboseJson => "verbose_json",
            ResponseFormat::Text => "text",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = TranscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        ResponseFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| TranscribeError::UnsupportedFormat {
                format: s.to_string(),
                supported: ResponseFormat::ALL
                    .iter()
                    .map(|f| f.as_str().to_string())
                    .collect(),
            })
    }
}

/// Properties of an audio file as seen by the inspector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioDetails {
    /// Length in seconds
    pub duration: f64,
    pub channels: u16,
    /// Sample rate in Hz, 0 when unknown
    pub sample_rate: u32,
    pub file_size_mb: f64,
}

impl AudioDetails {
    /// Details used when no probe could read the file
    pub fn unknown(file_size_mb: f64) -> Self {
        Self {
            duration: 0.0,
            channels: 1,
            sample_rate: 0,
            file_size_mb,
        }
    }
}

/// A single upload, built by the provider right before it is sent
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub file_path: PathBuf,
    pub model: Model,
    pub response_format: ResponseFormat,
    pub language: Option<String>,
}
