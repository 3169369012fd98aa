//! Validate local audio files and transcribe them with the Groq Whisper API.
//!
//! ```text
//! path → Validator (extension, size) → Inspector probes → duration check
//!      → GroqProvider multipart upload → TranscriptionResult → export
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod inspect;
pub mod probe;
pub mod providers;
pub mod result;
pub mod types;
pub mod validate;

pub use config::{ClientConfig, Policy};
pub use error::{Result, TranscribeError};
pub use export::{detect_language, export, export_to, output_path_for, ExportFormat};
pub use inspect::Inspector;
pub use providers::{GroqProvider, TranscriptionProvider};
pub use result::TranscriptionResult;
pub use types::{AudioDetails, Model, ResponseFormat, TranscriptionRequest};
pub use validate::{validate_audio_file, Advisory, Validation, Validator};
