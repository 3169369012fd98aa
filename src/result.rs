use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TranscribeError};
use crate::types::ResponseFormat;

/// Body of a `text` response, wrapped so it has the same `text` field as the JSON shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTranscription {
    pub text: String,
}

/// Body of a `json` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonTranscription {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a `verbose_json` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerboseTranscription {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A timestamped span of a verbose transcription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub id: u64,
    pub start: f64,
    pub end: f64,
    pub text: String,
    /// `tokens`, `avg_logprob`, `no_speech_prob` and whatever else the API sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A transcription as returned by the API.
///
/// Unknown fields are kept, so serializing gives back the API's document up to
/// normalization: `null` known fields are dropped, a missing `text` becomes `""`
/// and an integer `duration` becomes a float. Reparsing an export is lossless.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranscriptionResult {
    Text(TextTranscription),
    Json(JsonTranscription),
    Verbose(VerboseTranscription),
}

impl TranscriptionResult {
    /// Parses a successful response body that was requested as `format`
    pub fn parse_body(format: ResponseFormat, body: &str) -> Result<Self> {
        match format {
            ResponseFormat::Text => Ok(Self::Text(TextTranscription {
                text: body.to_string(),
            })),
            _ => Self::from_document(format, body),
        }
    }

    /// Parses a JSON document (an API body or an earlier export) of the given shape
    pub fn from_document(format: ResponseFormat, document: &str) -> Result<Self> {
        Ok(match format {
            ResponseFormat::Text => Self::Text(parse_json(document)?),
            ResponseFormat::Json => Self::Json(parse_json(document)?),
            ResponseFormat::VerboseJson => Self::Verbose(parse_json(document)?),
        })
    }

    pub fn format(&self) -> ResponseFormat {
        match self {
            Self::Text(_) => ResponseFormat::Text,
            Self::Json(_) => ResponseFormat::Json,
            Self::Verbose(_) => ResponseFormat::VerboseJson,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Text(t) => &t.text,
            Self::Json(t) => &t.text,
            Self::Verbose(t) => &t.text,
        }
    }

    /// Language reported by the API; only verbose responses carry one
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Verbose(t) => t.language.as_deref(),
            Self::Json(t) => t.extra.get("language").and_then(Value::as_str),
            Self::Text(_) => None,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Verbose(t) => t.segments.as_deref().unwrap_or_default(),
            _ => &[],
        }
    }
}

fn parse_json<T: DeserializeOwned>(document: &str) -> Result<T> {
    serde_json::from_str(document).map_err(|e| TranscribeError::MalformedResponse(e.to_string()))
}
