use std::path::Path;

use lofty::file::AudioFile;

use super::{Probe, ProbeError, ProbeReport};

/// Reads stream properties the way tag editors do, via lofty
pub struct TagProbe;

impl Probe for TagProbe {
    fn name(&self) -> &str {
        "tags"
    }

    fn probe(&self, path: &Path) -> Result<ProbeReport, ProbeError> {
        let tagged = lofty::read_from_path(path)
            .map_err(|e| ProbeError::Unreadable(format!("tag read failed: {e}")))?;
        let properties = tagged.properties();

        // Duration comes from the stream header rather than a frame count.
        Ok(ProbeReport {
            duration: properties.duration().as_secs_f64(),
            channels: properties.channels().map_or(1, u16::from),
            sample_rate: properties.sample_rate().unwrap_or(0),
        })
    }
}
