use std::path::Path;

use super::{Probe, ProbeError, ProbeReport};

/// Plain RIFF/WAVE header reader, only tried for `.wav` files
pub struct WavProbe;

impl Probe for WavProbe {
    fn name(&self) -> &str {
        "wav"
    }

    fn supports(&self, extension: &str) -> bool {
        extension == ".wav"
    }

    fn probe(&self, path: &Path) -> Result<ProbeReport, ProbeError> {
        let reader = hound::WavReader::open(path).map_err(|e| match e {
            hound::Error::IoError(io) => ProbeError::Open(io),
            other => ProbeError::Unreadable(format!("failed to parse WAV header: {other}")),
        })?;
        let spec = reader.spec();

        ProbeReport::from_frames(u64::from(reader.duration()), spec.sample_rate, spec.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, sample_rate: u32, channels: u16, frames: u32) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..frames * u32::from(channels) {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn reads_stereo_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, 44_100, 2, 22_050);

        let report = WavProbe.probe(&path).unwrap();
        assert_eq!(report.channels, 2);
        assert_eq!(report.sample_rate, 44_100);
        assert!((report.duration - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"definitely not RIFF").unwrap();

        assert!(matches!(
            WavProbe.probe(&path),
            Err(ProbeError::Unreadable(_))
        ));
    }

    #[test]
    fn only_supports_wav() {
        assert!(WavProbe.supports(".wav"));
        assert!(!WavProbe.supports(".mp3"));
    }
}
