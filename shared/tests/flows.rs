use shared::flow::image::PREDICTION_ERROR_TEXT;
use shared::{
    ImageFlow, ImagePrediction, Label, UploadCandidate, VideoFlow, VideoPrediction,
    MAX_IMAGE_BYTES,
};

#[derive(Debug, Clone, PartialEq)]
struct FakeFile {
    name: &'static str,
    mime: &'static str,
    size: u64,
}

const PORTRAIT: FakeFile = FakeFile {
    name: "portrait.jpg",
    mime: "image/jpeg",
    size: 812_004,
};

fn select(flow: &mut ImageFlow<FakeFile, String>, file: FakeFile) -> bool {
    flow.select(file.mime, file.size, || UploadCandidate {
        preview: format!("blob:{}", file.name),
        file: file.clone(),
    })
    .is_ok()
}

fn decode_image(body: &str) -> ImagePrediction {
    serde_json::from_str(body).expect("valid image response")
}

#[test]
fn test_invalid_files_never_produce_a_request() {
    let mut flow = ImageFlow::new();
    let document = FakeFile {
        name: "notes.pdf",
        mime: "application/pdf",
        size: 1_000,
    };
    let huge = FakeFile {
        name: "raw.png",
        mime: "image/png",
        size: MAX_IMAGE_BYTES + 1,
    };

    assert!(!select(&mut flow, document));
    assert!(!select(&mut flow, huge));
    assert!(flow.begin_submit().is_none());
}

#[test]
fn test_image_round_trip_from_json() {
    let mut flow = ImageFlow::new();
    assert!(select(&mut flow, PORTRAIT));

    let (ticket, file) = flow.begin_submit().unwrap();
    assert_eq!(file.name, "portrait.jpg");

    flow.submit_success(ticket, decode_image(r#"{"prediction":"Fake","probability":0.83}"#));
    flow.finish(ticket);

    let shares: Vec<(Label, f64)> = flow.breakdown().iter().map(|s| (s.name, s.value)).collect();
    assert_eq!(shares[0].0, Label::Real);
    assert!((shares[0].1 - 0.17).abs() < 1e-9);
    assert_eq!(shares[1].0, Label::Fake);
    assert!((shares[1].1 - 0.83).abs() < 1e-9);
}

#[test]
fn test_missing_probability_decodes_to_none() {
    assert_eq!(decode_image(r#"{"prediction":"Real"}"#).probability, None);
    assert_eq!(
        decode_image(r#"{"prediction":"Real","probability":null}"#).probability,
        None
    );
}

#[test]
fn test_history_summary_counts_every_success() {
    let mut flow = ImageFlow::new();
    let outcomes = [
        r#"{"prediction":"Real","probability":0.91}"#,
        r#"{"prediction":"Fake","probability":0.66}"#,
        r#"{"prediction":"Fake"}"#,
        r#"{"prediction":"Real","probability":0.52}"#,
        r#"{"prediction":"Fake","probability":0.99}"#,
    ];

    for body in outcomes {
        select(&mut flow, PORTRAIT);
        let (ticket, _) = flow.begin_submit().unwrap();
        flow.submit_success(ticket, decode_image(body));
        flow.finish(ticket);
    }

    // a failed submission adds nothing
    let (ticket, _) = flow.begin_submit().unwrap();
    flow.submit_failure(ticket);
    flow.finish(ticket);

    let summary = flow.history_summary();
    assert_eq!(summary[0].name, Label::Real);
    assert_eq!(summary[0].count, 2);
    assert_eq!(summary[1].name, Label::Fake);
    assert_eq!(summary[1].count, 3);
    assert_eq!(summary.iter().map(|b| b.count).sum::<usize>(), outcomes.len());
}

#[test]
fn test_failure_then_reset() {
    let mut flow = ImageFlow::new();
    select(&mut flow, PORTRAIT);
    let (ticket, _) = flow.begin_submit().unwrap();
    flow.submit_success(ticket, decode_image(r#"{"prediction":"Real","probability":0.8}"#));
    flow.finish(ticket);

    let (ticket, _) = flow.begin_submit().unwrap();
    flow.submit_failure(ticket);
    flow.finish(ticket);
    assert_eq!(flow.result_text(), Some(PREDICTION_ERROR_TEXT));
    assert!(!flow.loading());

    flow.reset();
    assert!(flow.candidate().is_none());
    assert!(flow.result_text().is_none());
    assert_eq!(flow.history().len(), 1);
}

#[test]
fn test_video_response_drives_pie_and_gallery() {
    let body = r#"{
        "final_prediction": "Real",
        "confidence": 70.0,
        "fake_frames": 3,
        "real_frames": 7,
        "video_url": "http://127.0.0.1:5001/uploads/clip.mp4",
        "frames": [
            {"filename": "frame_000.jpg", "label": "Fake"},
            {"filename": "frame_030.jpg", "label": "Real"},
            {"filename": "frame_060.jpg", "label": "Real"}
        ]
    }"#;
    let prediction: VideoPrediction = serde_json::from_str(body).unwrap();

    let mut flow = VideoFlow::new();
    flow.select(Some("clip.mp4"));
    let (ticket, _) = flow.begin_submit().unwrap();
    assert!(flow.submit_success(ticket, prediction));
    flow.finish(ticket);

    let pie = flow.frame_breakdown().unwrap();
    assert_eq!(pie.values, [3, 7]);
    assert_eq!(pie.labels, ["Fake Frames", "Real Frames"]);

    let names: Vec<&str> = flow.frames().iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, ["frame_000.jpg", "frame_030.jpg", "frame_060.jpg"]);
    assert_eq!(flow.result().unwrap().total_frames(), 10);
}

#[test]
fn test_unknown_label_is_a_decode_error() {
    let result: Result<ImagePrediction, _> =
        serde_json::from_str(r#"{"prediction":"Maybe","probability":0.5}"#);
    assert!(result.is_err());
}
