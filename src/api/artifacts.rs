use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::errors::api::ArtifactError;
use crate::types::dto::artifact::{
    SaveScreenshotRequest, SaveScreenshotResponse, TextToSpeechRequest, TextToSpeechResponse,
};

/// File-sink endpoints for generated side artifacts
///
/// Audio stubs and screenshots land under the public directory and are
/// served back as static assets; the entity stores are not involved.
pub struct ArtifactApi {
    public_dir: PathBuf,
}

impl ArtifactApi {
    pub fn new(public_dir: PathBuf) -> Self {
        Self { public_dir }
    }
}

/// API tags for artifact endpoints
#[derive(Tags)]
enum ArtifactTags {
    /// Generated file artifacts
    Artifacts,
}

#[OpenApi]
impl ArtifactApi {
    /// Store submitted text as a speech artifact
    ///
    /// Actual synthesis needs an external TTS API key; until one is
    /// configured the text itself is written under public/audios and its
    /// URL returned.
    #[oai(
        path = "/text-to-speech",
        method = "post",
        tag = "ArtifactTags::Artifacts"
    )]
    async fn text_to_speech(
        &self,
        body: Json<TextToSpeechRequest>,
    ) -> Result<Json<TextToSpeechResponse>, ArtifactError> {
        let Some(text) = body.0.text.filter(|t| !t.is_empty()) else {
            return Err(ArtifactError::missing_field("text is required"));
        };

        let file_name = format!("speech_{}.txt", Utc::now().timestamp_millis());
        let dir = self.public_dir.join("audios");

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ArtifactError::internal_error("create_audio_dir", e))?;
        tokio::fs::write(dir.join(&file_name), text)
            .await
            .map_err(|e| ArtifactError::internal_error("write_audio_artifact", e))?;

        Ok(Json(TextToSpeechResponse {
            success: true,
            message: "Speech synthesis requires an external TTS API key".to_string(),
            file_path: format!("/audios/{file_name}"),
        }))
    }

    /// Save a base64-encoded screenshot under public/screenshots
    #[oai(
        path = "/save-screenshot",
        method = "post",
        tag = "ArtifactTags::Artifacts"
    )]
    async fn save_screenshot(
        &self,
        body: Json<SaveScreenshotRequest>,
    ) -> Result<Json<SaveScreenshotResponse>, ArtifactError> {
        let Some(image) = body.0.base64_image.filter(|i| !i.is_empty()) else {
            return Err(ArtifactError::missing_field("base64Image is required"));
        };

        // Strip a data-URI header such as `data:image/png;base64,`
        let data = image
            .split_once("base64,")
            .map(|(_, rest)| rest)
            .unwrap_or(&image);

        let bytes = BASE64
            .decode(data)
            .map_err(|e| ArtifactError::internal_error("decode_screenshot", e))?;

        let file_name = format!("screenshot_{}.png", Utc::now().timestamp_millis());
        let dir = self.public_dir.join("screenshots");

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ArtifactError::internal_error("create_screenshot_dir", e))?;
        tokio::fs::write(dir.join(&file_name), bytes)
            .await
            .map_err(|e| ArtifactError::internal_error("write_screenshot", e))?;

        Ok(Json(SaveScreenshotResponse {
            success: true,
            image_url: format!("/screenshots/{file_name}"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_in_temp_dir(tag: &str) -> ArtifactApi {
        let dir = std::env::temp_dir().join(format!("alibi-backend-test-{tag}"));
        ArtifactApi::new(dir)
    }

    #[tokio::test]
    async fn test_text_to_speech_writes_artifact_and_returns_url() {
        let api = api_in_temp_dir("tts");

        let response = api
            .text_to_speech(Json(TextToSpeechRequest {
                text: Some("calling in sick".to_string()),
                voice_id: None,
            }))
            .await
            .expect("request should succeed");

        assert!(response.0.success);
        assert!(response.0.file_path.starts_with("/audios/speech_"));
        assert!(response.0.file_path.ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_text_to_speech_requires_text() {
        let api = api_in_temp_dir("tts-missing");

        let result = api
            .text_to_speech(Json(TextToSpeechRequest {
                text: None,
                voice_id: Some("calm".to_string()),
            }))
            .await;

        assert!(matches!(result, Err(ArtifactError::MissingField(_))));
    }

    #[tokio::test]
    async fn test_save_screenshot_strips_data_uri_header() {
        let api = api_in_temp_dir("screenshot");

        // A 1x1 transparent PNG
        let payload = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

        let response = api
            .save_screenshot(Json(SaveScreenshotRequest {
                base64_image: Some(payload.to_string()),
            }))
            .await
            .expect("request should succeed");

        assert!(response.0.success);
        assert!(response.0.image_url.starts_with("/screenshots/screenshot_"));
    }

    #[tokio::test]
    async fn test_save_screenshot_requires_image() {
        let api = api_in_temp_dir("screenshot-missing");

        let result = api
            .save_screenshot(Json(SaveScreenshotRequest { base64_image: None }))
            .await;

        assert!(matches!(result, Err(ArtifactError::MissingField(_))));
    }
}
