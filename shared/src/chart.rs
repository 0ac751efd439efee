use crate::flow::image::HistoryEntry;
use crate::label::Label;
use crate::prediction::VideoPrediction;
use strum::IntoEnumIterator;

pub const FAKE_FRAMES_LABEL: &str = "Fake Frames";
pub const REAL_FRAMES_LABEL: &str = "Real Frames";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSlice {
    pub name: Label,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarDatum {
    pub name: Label,
    pub count: usize,
}

/// Frame counts as handed to the pie chart, fake first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePie {
    pub labels: [&'static str; 2],
    pub values: [u32; 2],
}

/// Splits a single prediction into Real and Fake shares that sum to 1.
///
/// The probability belongs to the predicted label; the other label gets the
/// complement. Without a probability there is nothing to chart.
pub fn prediction_breakdown(label: Label, probability: Option<f64>) -> Vec<ChartSlice> {
    let Some(probability) = probability else {
        return Vec::new();
    };
    let p = probability.clamp(0.0, 1.0);

    Label::iter()
        .map(|name| ChartSlice {
            name,
            value: if name == label { p } else { 1.0 - p },
        })
        .collect()
}

pub fn history_summary<P>(entries: &[HistoryEntry<P>]) -> Vec<BarDatum> {
    Label::iter()
        .map(|name| BarDatum {
            name,
            count: entries.iter().filter(|e| e.prediction == name).count(),
        })
        .collect()
}

pub fn frame_breakdown(video: &VideoPrediction) -> FramePie {
    FramePie {
        labels: [FAKE_FRAMES_LABEL, REAL_FRAMES_LABEL],
        values: [video.fake_frames, video.real_frames],
    }
}

/// Formats a `[0, 1]` share as a percentage, e.g. `percent(0.8312, 2) == "83.12%"`.
pub fn percent(share: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, share * 100.0)
}
