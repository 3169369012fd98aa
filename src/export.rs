use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, TranscribeError};
use crate::result::TranscriptionResult;
use crate::types::ResponseFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON of the whole result
    Json,
    /// Only the transcript text
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "text",
        }
    }

    /// Exporter able to write a response of the given shape
    pub fn for_response(format: ResponseFormat) -> Self {
        match format {
            ResponseFormat::Json | ResponseFormat::VerboseJson => ExportFormat::Json,
            ResponseFormat::Text => ExportFormat::Text,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = TranscribeError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| TranscribeError::UnsupportedFormat {
                format: s.to_string(),
                supported: ExportFormat::ALL
                    .iter()
                    .map(|f| f.as_str().to_string())
                    .collect(),
            })
    }
}

/// Renders a result in the requested format
pub fn export(result: &TranscriptionResult, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| TranscribeError::MalformedResponse(e.to_string())),
        ExportFormat::Text => Ok(result.text().to_string()),
    }
}

/// Renders a result and writes it to `path`, returning the written content
pub fn export_to(
    result: &TranscriptionResult,
    format: ExportFormat,
    path: &Path,
) -> Result<String> {
    let content = export(result, format)?;
    fs::write(path, &content)?;
    tracing::debug!(path = %path.display(), format = %format, "transcription exported");
    Ok(content)
}

/// Language reported for the transcription, or `"unknown"`
pub fn detect_language(result: &TranscriptionResult) -> &str {
    result.language().unwrap_or("unknown")
}

/// Where the transcript of `input` is written.
///
/// An existing directory as `output` receives `<stem>_transcript.<format>`;
/// any other `output` is used as the file path; without `output` the file
/// lands in the working directory.
pub fn output_path_for(input: &Path, output: Option<&Path>, format: ResponseFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    let file_name = format!("{stem}_transcript.{format}");

    match output {
        Some(dir) if dir.is_dir() => dir.join(file_name),
        Some(file) => file.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}
