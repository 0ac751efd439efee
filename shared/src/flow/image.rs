use super::{RequestFence, SubmitTicket};
use crate::chart::{self, BarDatum, ChartSlice};
use crate::label::Label;
use crate::prediction::ImagePrediction;
use crate::validation::{validate_image, ValidationError};
use uuid::Uuid;

/// Text shown in place of a label when the image request fails.
pub const PREDICTION_ERROR_TEXT: &str = "Error during prediction.";

/// A selected file `F` together with its preview reference `P`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate<F, P> {
    pub file: F,
    pub preview: P,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<P> {
    pub id: Uuid,
    pub image: P,
    pub prediction: Label,
    pub probability: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageVerdict {
    Predicted(ImagePrediction),
    Failed,
}

impl ImageVerdict {
    pub fn text(&self) -> &str {
        match self {
            ImageVerdict::Predicted(p) => p.prediction.as_ref(),
            ImageVerdict::Failed => PREDICTION_ERROR_TEXT,
        }
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            ImageVerdict::Predicted(p) => Some(p.prediction),
            ImageVerdict::Failed => None,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            ImageVerdict::Predicted(p) => p.probability,
            ImageVerdict::Failed => None,
        }
    }
}

/// State of the image predictor: one candidate, one verdict, and the
/// session history, which only ever grows.
#[derive(Debug)]
pub struct ImageFlow<F, P> {
    candidate: Option<UploadCandidate<F, P>>,
    verdict: Option<ImageVerdict>,
    dragging: bool,
    history: Vec<HistoryEntry<P>>,
    fence: RequestFence,
}

impl<F, P> Default for ImageFlow<F, P> {
    fn default() -> Self {
        Self {
            candidate: None,
            verdict: None,
            dragging: false,
            history: Vec::new(),
            fence: RequestFence::default(),
        }
    }
}

impl<F: Clone, P: Clone> ImageFlow<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and, when accepted, replaces the candidate.
    ///
    /// `make_candidate` only runs once validation passes, so a rejected file
    /// never allocates a preview. On rejection nothing changes.
    pub fn select(
        &mut self,
        mime: &str,
        size: u64,
        make_candidate: impl FnOnce() -> UploadCandidate<F, P>,
    ) -> Result<(), ValidationError> {
        validate_image(mime, size)?;
        self.candidate = Some(make_candidate());
        self.verdict = None;
        self.fence.invalidate();
        Ok(())
    }

    /// Starts a submission. Returns `None` when there is nothing to send.
    pub fn begin_submit(&mut self) -> Option<(SubmitTicket, F)> {
        let file = self.candidate.as_ref()?.file.clone();
        self.verdict = None;
        Some((self.fence.issue(), file))
    }

    pub fn submit_success(&mut self, ticket: SubmitTicket, prediction: ImagePrediction) -> bool {
        if !self.fence.is_current(ticket) {
            return false;
        }
        if let Some(candidate) = &self.candidate {
            self.history.push(HistoryEntry {
                id: Uuid::new_v4(),
                image: candidate.preview.clone(),
                prediction: prediction.prediction,
                probability: prediction.probability,
            });
        }
        self.verdict = Some(ImageVerdict::Predicted(prediction));
        true
    }

    pub fn submit_failure(&mut self, ticket: SubmitTicket) -> bool {
        if !self.fence.is_current(ticket) {
            return false;
        }
        self.verdict = Some(ImageVerdict::Failed);
        true
    }

    /// Clears the loading flag for `ticket`. Runs on every completion path.
    pub fn finish(&mut self, ticket: SubmitTicket) -> bool {
        self.fence.finish(ticket)
    }

    pub fn reset(&mut self) {
        self.candidate = None;
        self.verdict = None;
        self.fence.invalidate();
    }

    pub fn set_dragging(&mut self, dragging: bool) -> bool {
        let changed = self.dragging != dragging;
        self.dragging = dragging;
        changed
    }

    pub fn candidate(&self) -> Option<&UploadCandidate<F, P>> {
        self.candidate.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.candidate.as_ref().map(|c| &c.preview)
    }

    pub fn verdict(&self) -> Option<&ImageVerdict> {
        self.verdict.as_ref()
    }

    pub fn result_text(&self) -> Option<&str> {
        self.verdict.as_ref().map(ImageVerdict::text)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.verdict.as_ref().and_then(ImageVerdict::confidence)
    }

    pub fn loading(&self) -> bool {
        self.fence.loading()
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn history(&self) -> &[HistoryEntry<P>] {
        &self.history
    }

    /// Real/Fake shares of the current prediction; empty without a probability.
    pub fn breakdown(&self) -> Vec<ChartSlice> {
        match &self.verdict {
            Some(ImageVerdict::Predicted(p)) => {
                chart::prediction_breakdown(p.prediction, p.probability)
            }
            _ => Vec::new(),
        }
    }

    pub fn history_summary(&self) -> Vec<BarDatum> {
        chart::history_summary(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Flow = ImageFlow<&'static str, String>;

    fn candidate(name: &'static str) -> UploadCandidate<&'static str, String> {
        UploadCandidate {
            file: name,
            preview: format!("blob:{name}"),
        }
    }

    fn selected(name: &'static str) -> Flow {
        let mut flow = Flow::new();
        flow.select("image/png", 1024, || candidate(name)).unwrap();
        flow
    }

    fn fake(probability: f64) -> ImagePrediction {
        ImagePrediction {
            prediction: Label::Fake,
            probability: Some(probability),
        }
    }

    #[test]
    fn test_rejected_file_leaves_state_untouched() {
        let mut flow = selected("a.png");
        let mut built = false;
        let err = flow
            .select("application/pdf", 10, || {
                built = true;
                candidate("b.pdf")
            })
            .unwrap_err();

        assert!(matches!(err, ValidationError::NotAnImage { .. }));
        assert!(!built);
        assert_eq!(flow.preview().map(String::as_str), Some("blob:a.png"));
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut flow = Flow::new();
        assert!(flow.begin_submit().is_none());
        assert!(!flow.loading());
    }

    #[test]
    fn test_success_stores_verdict_and_history() {
        let mut flow = selected("a.png");
        let (ticket, file) = flow.begin_submit().unwrap();
        assert_eq!(file, "a.png");
        assert!(flow.loading());

        assert!(flow.submit_success(ticket, fake(0.83)));
        assert!(flow.finish(ticket));

        assert!(!flow.loading());
        assert_eq!(flow.result_text(), Some("Fake"));
        assert_eq!(flow.confidence(), Some(0.83));
        assert_eq!(flow.history().len(), 1);
        assert_eq!(flow.history()[0].image, "blob:a.png");
    }

    #[test]
    fn test_absent_probability_gives_no_confidence() {
        let mut flow = selected("a.png");
        let (ticket, _) = flow.begin_submit().unwrap();
        flow.submit_success(
            ticket,
            ImagePrediction {
                prediction: Label::Real,
                probability: None,
            },
        );
        assert_eq!(flow.confidence(), None);
        assert!(flow.breakdown().is_empty());
        assert_eq!(flow.history()[0].probability, None);
    }

    #[test]
    fn test_failure_shows_error_text_and_clears_loading() {
        let mut flow = selected("a.png");
        let (ticket, _) = flow.begin_submit().unwrap();
        assert!(flow.submit_failure(ticket));
        flow.finish(ticket);

        assert_eq!(flow.result_text(), Some("Error during prediction."));
        assert!(!flow.loading());
        assert!(flow.history().is_empty());
    }

    #[test]
    fn test_new_submission_clears_previous_verdict() {
        let mut flow = selected("a.png");
        let (ticket, _) = flow.begin_submit().unwrap();
        flow.submit_success(ticket, fake(0.9));
        flow.finish(ticket);

        flow.begin_submit().unwrap();
        assert_eq!(flow.verdict(), None);
        assert_eq!(flow.confidence(), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut flow = selected("a.png");
        let (first, _) = flow.begin_submit().unwrap();
        let (second, _) = flow.begin_submit().unwrap();

        assert!(flow.submit_success(second, fake(0.7)));
        assert!(flow.finish(second));
        assert!(!flow.submit_success(first, fake(0.1)));
        assert!(!flow.finish(first));

        assert_eq!(flow.confidence(), Some(0.7));
        assert_eq!(flow.history().len(), 1);
    }

    #[test]
    fn test_reselect_abandons_in_flight_request() {
        let mut flow = selected("a.png");
        let (ticket, _) = flow.begin_submit().unwrap();
        flow.select("image/jpeg", 2048, || candidate("b.jpg")).unwrap();

        assert!(!flow.loading());
        assert!(!flow.submit_success(ticket, fake(0.5)));
        assert_eq!(flow.verdict(), None);
        assert!(flow.history().is_empty());
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut flow = selected("a.png");
        let (ticket, _) = flow.begin_submit().unwrap();
        flow.submit_success(ticket, fake(0.83));
        flow.finish(ticket);

        flow.reset();
        assert!(flow.candidate().is_none());
        assert!(flow.preview().is_none());
        assert!(flow.verdict().is_none());
        assert!(flow.confidence().is_none());
        assert_eq!(flow.history().len(), 1);
    }

    #[test]
    fn test_dragging_reports_changes_only() {
        let mut flow = Flow::new();
        assert!(flow.set_dragging(true));
        assert!(!flow.set_dragging(true));
        assert!(flow.dragging());
        assert!(flow.set_dragging(false));
    }
}
