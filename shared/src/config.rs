pub const DEFAULT_IMAGE_API: &str = "http://localhost:5000";
pub const DEFAULT_VIDEO_API: &str = "http://127.0.0.1:5001";

/// Base URLs of the two prediction services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    image_api: String,
    video_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_API, DEFAULT_VIDEO_API)
    }
}

impl Endpoints {
    pub fn new(image_api: &str, video_api: &str) -> Self {
        Self {
            image_api: image_api.trim_end_matches('/').to_string(),
            video_api: video_api.trim_end_matches('/').to_string(),
        }
    }

    /// Builds endpoints from optional overrides; missing or blank values keep the defaults.
    pub fn with_overrides(image_api: Option<&str>, video_api: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &'static str| match value.map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => default.to_string(),
        };
        Self::new(
            &pick(image_api, DEFAULT_IMAGE_API),
            &pick(video_api, DEFAULT_VIDEO_API),
        )
    }

    pub fn image_predict_url(&self) -> String {
        format!("{}/predict", self.image_api)
    }

    pub fn video_predict_url(&self) -> String {
        format!("{}/predict-video", self.video_api)
    }

    pub fn frame_url(&self, filename: &str) -> String {
        format!("{}/frames/{}", self.video_api, filename)
    }
}
