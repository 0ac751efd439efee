use super::{RequestFence, SubmitTicket};
use crate::chart::{self, FramePie};
use crate::prediction::{FramePrediction, VideoPrediction};

/// Message raised as a blocking alert when a video upload fails.
pub const VIDEO_ERROR_TEXT: &str = "Error uploading video";

/// State of the video predictor. Keeps no history: each successful
/// submission replaces the previous result.
#[derive(Debug)]
pub struct VideoFlow<F> {
    file: Option<F>,
    result: Option<VideoPrediction>,
    fence: RequestFence,
}

impl<F> Default for VideoFlow<F> {
    fn default() -> Self {
        Self {
            file: None,
            result: None,
            fence: RequestFence::default(),
        }
    }
}

impl<F: Clone> VideoFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any file is accepted as-is; videos are not validated client side.
    pub fn select(&mut self, file: Option<F>) {
        self.file = file;
        self.result = None;
        self.fence.invalidate();
    }

    pub fn begin_submit(&mut self) -> Option<(SubmitTicket, F)> {
        let file = self.file.clone()?;
        Some((self.fence.issue(), file))
    }

    pub fn submit_success(&mut self, ticket: SubmitTicket, prediction: VideoPrediction) -> bool {
        if !self.fence.is_current(ticket) {
            return false;
        }
        self.result = Some(prediction);
        true
    }

    /// Returns whether the failure belongs to the current request and
    /// should be reported to the user. The prior result is kept.
    pub fn submit_failure(&mut self, ticket: SubmitTicket) -> bool {
        self.fence.is_current(ticket)
    }

    pub fn finish(&mut self, ticket: SubmitTicket) -> bool {
        self.fence.finish(ticket)
    }

    pub fn result(&self) -> Option<&VideoPrediction> {
        self.result.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.fence.loading()
    }

    pub fn frames(&self) -> &[FramePrediction] {
        self.result
            .as_ref()
            .map(|r| r.frames.as_slice())
            .unwrap_or_default()
    }

    pub fn frame_breakdown(&self) -> Option<FramePie> {
        self.result.as_ref().map(chart::frame_breakdown)
    }
}
