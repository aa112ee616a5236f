use poem_openapi::Object;

/// Request to render text as a speech artifact
#[derive(Object, Debug)]
pub struct TextToSpeechRequest {
    pub text: Option<String>,

    /// Voice selection, forwarded to the synthesis backend once one is wired up
    pub voice_id: Option<String>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct TextToSpeechResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
}

/// Request to persist a base64-encoded screenshot
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct SaveScreenshotRequest {
    pub base64_image: Option<String>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct SaveScreenshotResponse {
    pub success: bool,
    pub image_url: String,
}
