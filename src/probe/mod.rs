use std::path::Path;

use thiserror::Error;

/// What a probe learned about an audio stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReport {
    pub duration: f64,
    pub channels: u16,
    pub sample_rate: u32,
}

impl ProbeReport {
    /// Builds a report from a frame count, as most containers declare it
    pub fn from_frames(frames: u64, sample_rate: u32, channels: u16) -> Result<Self, ProbeError> {
        if sample_rate == 0 {
            return Err(ProbeError::Unreadable("sample rate is zero".to_string()));
        }
        Ok(Self {
            duration: frames as f64 / f64::from(sample_rate),
            channels,
            sample_rate,
        })
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to open file: {0}")]
    Open(#[from] std::io::Error),

    #[error("{0}")]
    Unreadable(String),

    #[error("no audio track found")]
    NoAudioTrack,
}

/// One way of extracting metadata from an audio file
pub trait Probe: Send + Sync {
    fn name(&self) -> &str;

    /// Whether this probe should be tried for a lowercase, dot-prefixed extension
    fn supports(&self, _extension: &str) -> bool {
        true
    }

    fn probe(&self, path: &Path) -> Result<ProbeReport, ProbeError>;
}

pub mod container;
pub mod tags;
pub mod wav;

pub use container::ContainerProbe;
pub use tags::TagProbe;
pub use wav::WavProbe;

/// Probes in the order they are tried: container reader, tag reader, WAV header
pub fn default_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(ContainerProbe),
        Box::new(TagProbe),
        Box::new(WavProbe),
    ]
}
