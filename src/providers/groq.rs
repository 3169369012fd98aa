use std::fs::File;
use std::path::Path;

use reqwest::blocking::{multipart, Client};
use secrecy::ExposeSecret;

use super::TranscriptionProvider;
use crate::config::ClientConfig;
use crate::error::{Result, TranscribeError};
use crate::inspect::extension_of;
use crate::result::TranscriptionResult;
use crate::types::{ResponseFormat, TranscriptionRequest};
use crate::validate::Validator;

fn mime_for(extension: &str) -> &'static str {
    match extension {
        ".wav" => "audio/wav",
        ".mp4" | ".m4a" => "audio/mp4",
        ".webm" => "audio/webm",
        _ => "audio/mpeg",
    }
}

/// Client for Groq's OpenAI-compatible transcription endpoint
pub struct GroqProvider {
    config: ClientConfig,
    validator: Validator,
    client: Client,
}

impl GroqProvider {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TranscribeError::Network)?;
        let validator = Validator::new(config.policy.clone());

        Ok(Self {
            config,
            validator,
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn send(&self, request: &TranscriptionRequest) -> Result<TranscriptionResult> {
        let path = &request.file_path;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        // The part owns the handle; it is closed once the request is done with it.
        let file = File::open(path)?;
        let length = file.metadata()?.len();
        let file_part = multipart::Part::reader_with_length(file, length)
            .file_name(file_name)
            .mime_str(mime_for(&extension_of(path)))
            .map_err(TranscribeError::Network)?;

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("model", request.model.as_str())
            .text("response_format", request.response_format.as_str());
        if let Some(language) = &request.language {
            form = form.text("language", language.clone());
        }

        tracing::info!(
            url = %self.config.base_url,
            model = %request.model,
            response_format = %request.response_format,
            api_key = %self.config.masked_api_key(),
            "sending transcription request"
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key.expose_secret()),
            )
            .multipart(form)
            .send()
            .map_err(|e| {
                tracing::error!("Groq request failed: {e}");
                TranscribeError::Network(e)
            })?;

        let status = response.status();
        tracing::debug!("got response with status: {status}");

        if !status.is_success() {
            let headers = format!("{:?}", response.headers());
            let body = response
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!(
                status = status.as_u16(),
                headers = %headers,
                "Groq API error: {body}"
            );
            return Err(TranscribeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(|e| {
            TranscribeError::MalformedResponse(format!("failed to read response body: {e}"))
        })?;

        TranscriptionResult::parse_body(request.response_format, &body).map_err(|e| {
            tracing::error!("failed to parse transcription response: {e}");
            e
        })
    }
}

impl TranscriptionProvider for GroqProvider {
    fn name(&self) -> &str {
        "Groq Whisper"
    }

    fn transcribe(
        &self,
        path: &Path,
        format: ResponseFormat,
        language: Option<&str>,
    ) -> Result<TranscriptionResult> {
        self.validator.validate(path)?;

        let request = TranscriptionRequest {
            file_path: path.to_path_buf(),
            model: self.config.model,
            response_format: format,
            language: language.map(str::to_string),
        };

        self.send(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types() {
        assert_eq!(mime_for(".wav"), "audio/wav");
        assert_eq!(mime_for(".m4a"), "audio/mp4");
        assert_eq!(mime_for(".mpga"), "audio/mpeg");
        assert_eq!(mime_for(".webm"), "audio/webm");
    }
}
