pub mod charts;
pub mod handlers;
pub mod header;
pub mod home;
pub mod image_predictor;
pub mod preview_area;
pub mod results;
pub mod theme_toggle;
pub mod upload_section;
pub mod utils;
pub mod video_predictor;
