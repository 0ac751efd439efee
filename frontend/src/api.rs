use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{Endpoints, ImagePrediction, VideoPrediction};
use thiserror::Error;
use web_sys::FormData;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to build form data: {0}")]
    FormData(String),
}

pub async fn predict_image(
    endpoints: &Endpoints,
    file: &GlooFile,
) -> Result<ImagePrediction, ApiError> {
    post_file(&endpoints.image_predict_url(), "file", file).await
}

pub async fn predict_video(
    endpoints: &Endpoints,
    file: &GlooFile,
) -> Result<VideoPrediction, ApiError> {
    post_file(&endpoints.video_predict_url(), "video", file).await
}

/// Sends `file` as a single multipart field and decodes the JSON reply.
async fn post_file<T: DeserializeOwned>(
    url: &str,
    field: &str,
    file: &GlooFile,
) -> Result<T, ApiError> {
    let form_data = FormData::new().map_err(|err| ApiError::FormData(format!("{:?}", err)))?;
    form_data
        .append_with_blob_and_filename(field, file.as_ref(), &file.name())
        .map_err(|err| ApiError::FormData(format!("{:?}", err)))?;

    let response = Request::post(url).body(form_data)?.send().await?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
