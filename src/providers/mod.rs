use std::path::Path;

use crate::error::Result;
use crate::result::TranscriptionResult;
use crate::types::ResponseFormat;

pub trait TranscriptionProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Validates `path` and uploads it; one request, no retries.
    fn transcribe(
        &self,
        path: &Path,
        format: ResponseFormat,
        language: Option<&str>,
    ) -> Result<TranscriptionResult>;

    /// Transcribes each path in turn, stopping at the first error.
    fn batch_transcribe(
        &self,
        paths: &[&Path],
        format: ResponseFormat,
        language: Option<&str>,
    ) -> Result<Vec<TranscriptionResult>> {
        paths
            .iter()
            .map(|path| self.transcribe(path, format, language))
            .collect()
    }
}

pub mod groq;

pub use groq::GroqProvider;
