#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

/// Writes a silent 16-bit PCM WAV of `seconds` length and returns its path
pub fn write_wav(dir: &Path, name: &str, sample_rate: u32, channels: u16, seconds: f64) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    let frames = (seconds * f64::from(sample_rate)).round() as u64;
    for _ in 0..frames * u64::from(channels) {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
    path
}

/// Creates a sparse file of `megabytes` MiB without writing its contents
pub fn sparse_file(dir: &Path, name: &str, megabytes: u64) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    file.set_len(megabytes * 1024 * 1024).unwrap();
    path
}

/// MPEG-1 Layer III, 128 kb/s, 44.1 kHz, mono, no CRC, no padding
const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0xC0];
const MP3_FRAME_LEN: usize = 417;
pub const MP3_SAMPLES_PER_FRAME: u64 = 1152;

/// Writes a constant-bitrate MP3 of `frames` silent frames and returns its path
pub fn write_mp3(dir: &Path, name: &str, frames: usize) -> PathBuf {
    let path = dir.join(name);
    let mut frame = vec![0u8; MP3_FRAME_LEN];
    frame[..4].copy_from_slice(&MP3_FRAME_HEADER);
    let mut data = Vec::with_capacity(frame.len() * frames);
    for _ in 0..frames {
        data.extend_from_slice(&frame);
    }
    std::fs::write(&path, data).unwrap();
    path
}

fn ebml_size(size: usize) -> Vec<u8> {
    let size = size as u64;
    if size < 0x7F {
        vec![0x80 | size as u8]
    } else if size < 0x3FFF {
        (0x4000 | size as u16).to_be_bytes().to_vec()
    } else {
        (0x1000_0000 | size as u32).to_be_bytes().to_vec()
    }
}

fn ebml(id: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut out = id.to_vec();
    out.extend(ebml_size(payload.len()));
    out.extend_from_slice(payload);
    out
}

fn ebml_uint(id: &[u8], value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let skip = bytes.iter().take(7).take_while(|&&b| b == 0).count();
    ebml(id, &bytes[skip..])
}

fn ebml_float(id: &[u8], value: f64) -> Vec<u8> {
    ebml(id, &value.to_be_bytes())
}

/// Writes a mono 48 kHz Opus WebM whose header declares `duration_ms`
/// at the default 1 ms timestamp scale, with a single block of payload
pub fn write_webm(dir: &Path, name: &str, duration_ms: f64) -> PathBuf {
    let header = [
        ebml_uint(&[0x42, 0x86], 1),
        ebml_uint(&[0x42, 0xF7], 1),
        ebml_uint(&[0x42, 0xF2], 4),
        ebml_uint(&[0x42, 0xF3], 8),
        ebml(&[0x42, 0x82], b"webm"),
        ebml_uint(&[0x42, 0x87], 4),
        ebml_uint(&[0x42, 0x85], 2),
    ]
    .concat();

    let info = [
        ebml_uint(&[0x2A, 0xD7, 0xB1], 1_000_000),
        ebml_float(&[0x44, 0x89], duration_ms),
        ebml(&[0x4D, 0x80], b"groq-transcribe tests"),
        ebml(&[0x57, 0x41], b"groq-transcribe tests"),
    ]
    .concat();

    let mut opus_head = b"OpusHead".to_vec();
    opus_head.push(1);
    opus_head.push(1);
    opus_head.extend_from_slice(&312u16.to_le_bytes());
    opus_head.extend_from_slice(&48_000u32.to_le_bytes());
    opus_head.extend_from_slice(&0i16.to_le_bytes());
    opus_head.push(0);

    let audio = [
        ebml_float(&[0xB5], 48_000.0),
        ebml_uint(&[0x9F], 1),
    ]
    .concat();
    let track = [
        ebml_uint(&[0xD7], 1),
        ebml_uint(&[0x73, 0xC5], 1),
        ebml_uint(&[0x83], 2),
        ebml(&[0x86], b"A_OPUS"),
        ebml(&[0x63, 0xA2], &opus_head),
        ebml(&[0xE1], &audio),
    ]
    .concat();
    let tracks = ebml(&[0xAE], &track);

    // Track 1, relative timestamp 0, keyframe, one 20 ms CELT frame
    let block = [0x81, 0x00, 0x00, 0x80, 0xF8, 0xFF, 0xFE];
    let cluster = [ebml_uint(&[0xE7], 0), ebml(&[0xA3], &block)].concat();

    let segment = [
        ebml(&[0x15, 0x49, 0xA9, 0x66], &info),
        ebml(&[0x16, 0x54, 0xAE, 0x6B], &tracks),
        ebml(&[0x1F, 0x43, 0xB6, 0x75], &cluster),
    ]
    .concat();

    let data = [
        ebml(&[0x1A, 0x45, 0xDF, 0xA3], &header),
        ebml(&[0x18, 0x53, 0x80, 0x67], &segment),
    ]
    .concat();

    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}
