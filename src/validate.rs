use std::fmt;
use std::path::Path;

use crate::config::Policy;
use crate::error::{Result, TranscribeError};
use crate::inspect::{extension_of, file_size_mb, Inspector};
use crate::types::AudioDetails;

/// A non-fatal notice about a file that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The API bills short files as if they were `billed_seconds` long
    BilledMinimum { duration: f64, billed_seconds: f64 },
    /// Only the first track is transcribed
    MultipleChannels { channels: u16 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::BilledMinimum {
                duration,
                billed_seconds,
            } => write!(
                f,
                "Audio shorter than {billed_seconds} seconds ({duration:.2}s). \
                 You will be billed for a full {billed_seconds} seconds."
            ),
            Advisory::MultipleChannels { channels } => write!(
                f,
                "Multiple audio tracks detected ({channels} channels). \
                 Only the first track will be transcribed."
            ),
        }
    }
}

/// A file that is fit for upload
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub details: AudioDetails,
    pub advisories: Vec<Advisory>,
}

/// Applies a [`Policy`] to files before they are uploaded
#[derive(Default)]
pub struct Validator {
    policy: Policy,
    inspector: Inspector,
}

impl Validator {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            inspector: Inspector::default(),
        }
    }

    pub fn with_inspector(policy: Policy, inspector: Inspector) -> Self {
        Self { policy, inspector }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Checks existence, extension and size before probing, then duration.
    pub fn validate(&self, path: &Path) -> Result<Validation> {
        if !path.exists() {
            return Err(TranscribeError::FileNotFound(path.to_path_buf()));
        }

        let extension = extension_of(path);
        if !self.policy.allows_extension(&extension) {
            return Err(TranscribeError::UnsupportedExtension {
                extension,
                supported: self.policy.extensions.clone(),
            });
        }

        let size_mb = file_size_mb(path)?;
        if size_mb > self.policy.max_size_mb {
            return Err(TranscribeError::FileTooLarge {
                size_mb,
                limit_mb: self.policy.max_size_mb,
            });
        }

        let details = self.inspector.probe(path, &extension, size_mb);

        if details.duration < self.policy.min_duration_seconds {
            return Err(TranscribeError::FileTooShort {
                duration: details.duration,
                minimum: self.policy.min_duration_seconds,
            });
        }

        let mut advisories = Vec::new();
        if details.duration < self.policy.min_billed_seconds {
            advisories.push(Advisory::BilledMinimum {
                duration: details.duration,
                billed_seconds: self.policy.min_billed_seconds,
            });
        }
        if details.channels > 1 {
            advisories.push(Advisory::MultipleChannels {
                channels: details.channels,
            });
        }

        for advisory in &advisories {
            tracing::debug!(path = %path.display(), "advisory: {advisory}");
        }

        Ok(Validation {
            details,
            advisories,
        })
    }
}

/// Validates `path` against the default [`Policy`]
pub fn validate_audio_file(path: impl AsRef<Path>) -> Result<Validation> {
    Validator::default().validate(path.as_ref())
}
