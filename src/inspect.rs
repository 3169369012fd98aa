use std::fs;
use std::path::Path;

use crate::config::SUPPORTED_EXTENSIONS;
use crate::error::{Result, TranscribeError};
use crate::probe::{default_probes, Probe};
use crate::types::AudioDetails;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Lowercase, dot-prefixed extension of `path`, or an empty string
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}

pub(crate) fn file_size_mb(path: &Path) -> Result<f64> {
    Ok(fs::metadata(path)?.len() as f64 / BYTES_PER_MB)
}

/// Extracts [`AudioDetails`] by trying each probe in order until one succeeds
pub struct Inspector {
    probes: Vec<Box<dyn Probe>>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(default_probes())
    }
}

impl Inspector {
    pub fn new(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    pub fn probe_names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Inspects a file with one of the supported audio extensions.
    ///
    /// Never fails because a file cannot be decoded: when every probe gives
    /// up the result carries zero duration and sample rate.
    pub fn inspect(&self, path: &Path) -> Result<AudioDetails> {
        if !path.exists() {
            return Err(TranscribeError::FileNotFound(path.to_path_buf()));
        }

        let extension = extension_of(path);
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(TranscribeError::UnsupportedExtension {
                extension,
                supported: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            });
        }

        let size_mb = file_size_mb(path)?;
        Ok(self.probe(path, &extension, size_mb))
    }

    /// Runs the probes without any policy checks
    pub(crate) fn probe(&self, path: &Path, extension: &str, file_size_mb: f64) -> AudioDetails {
        for probe in self.probes.iter().filter(|p| p.supports(extension)) {
            match probe.probe(path) {
                Ok(report) => {
                    tracing::debug!(
                        probe = probe.name(),
                        path = %path.display(),
                        duration = report.duration,
                        channels = report.channels,
                        sample_rate = report.sample_rate,
                        "audio probe succeeded"
                    );
                    return AudioDetails {
                        duration: report.duration,
                        channels: report.channels.max(1),
                        sample_rate: report.sample_rate,
                        file_size_mb,
                    };
                }
                Err(e) => {
                    tracing::debug!(
                        probe = probe.name(),
                        path = %path.display(),
                        "audio probe failed: {e}"
                    );
                }
            }
        }

        tracing::warn!(
            path = %path.display(),
            "no probe could read the file, using size-only details"
        );
        AudioDetails::unknown(file_size_mb)
    }
}
