use crate::label::Label;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /predict` on the image service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImagePrediction {
    pub prediction: Label,
    /// Missing or `null` decodes to `None`. An explicit `0` stays `Some(0.0)`
    /// and is charted like any other probability; it is not folded into
    /// "absent".
    #[serde(default)]
    pub probability: Option<f64>,
}

/// One sampled frame, labelled on its own by the video service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FramePrediction {
    pub filename: String,
    pub label: Label,
}

/// Body of a successful `POST /predict-video`.
///
/// `confidence` is on a 0-100 scale, unlike the image probability.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoPrediction {
    pub final_prediction: Label,
    pub confidence: f64,
    pub fake_frames: u32,
    pub real_frames: u32,
    #[serde(default)]
    pub frames: Vec<FramePrediction>,
    pub video_url: String,
}

impl VideoPrediction {
    pub fn total_frames(&self) -> u64 {
        u64::from(self.fake_frames) + u64::from(self.real_frames)
    }
}
