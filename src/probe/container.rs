use std::fs::File;
use std::path::Path;

use symphonia::core::codecs::CODEC_TYPE_NULL;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use super::{Probe, ProbeError, ProbeReport};

/// General-purpose reader backed by symphonia's format probe
pub struct ContainerProbe;

impl Probe for ContainerProbe {
    fn name(&self) -> &str {
        "container"
    }

    fn probe(&self, path: &Path) -> Result<ProbeReport, ProbeError> {
        let file = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| ProbeError::Unreadable(format!("probe failed: {e}")))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .filter(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .or_else(|| {
                format
                    .tracks()
                    .iter()
                    .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            })
            .ok_or(ProbeError::NoAudioTrack)?;

        let track_id = track.id;
        let time_base = track.codec_params.time_base;
        let declared_frames = track.codec_params.n_frames;
        let channels = track.codec_params.channels.map_or(1, |c| c.count() as u16);
        let sample_rate = track
            .codec_params
            .sample_rate
            .filter(|&rate| rate > 0)
            .ok_or_else(|| ProbeError::Unreadable("sample rate not declared".to_string()))?;

        // Counted in time base units, which are sample frames only for some containers
        let units = match declared_frames {
            Some(units) => units,
            None => {
                // Streams without a length in the header: add up packet durations.
                let mut units = 0u64;
                loop {
                    let packet = match format.next_packet() {
                        Ok(p) => p,
                        Err(SymphoniaError::IoError(ref e))
                            if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                        {
                            break;
                        }
                        Err(e) => {
                            return Err(ProbeError::Unreadable(format!("packet read: {e}")))
                        }
                    };
                    if packet.track_id() == track_id {
                        units += packet.dur;
                    }
                }
                units
            }
        };

        match time_base {
            Some(time_base) => Ok(ProbeReport {
                duration: seconds(units, time_base),
                channels,
                sample_rate,
            }),
            None => ProbeReport::from_frames(units, sample_rate, channels),
        }
    }
}

fn seconds(units: u64, time_base: TimeBase) -> f64 {
    let time = time_base.calc_time(units);
    time.seconds as f64 + time.frac
}
