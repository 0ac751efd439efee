pub mod chart;
pub mod config;
pub mod flow;
pub mod label;
pub mod prediction;
pub mod validation;

pub use chart::{BarDatum, ChartSlice, FramePie};
pub use config::Endpoints;
pub use flow::image::{HistoryEntry, ImageFlow, ImageVerdict, UploadCandidate};
pub use flow::video::VideoFlow;
pub use flow::SubmitTicket;
pub use label::Label;
pub use prediction::{FramePrediction, ImagePrediction, VideoPrediction};
pub use validation::{validate_image, ValidationError, MAX_IMAGE_BYTES};
