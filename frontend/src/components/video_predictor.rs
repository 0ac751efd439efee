use super::charts::{PieChart, PieSlice, FAKE_COLOR, REAL_COLOR};
use super::utils::{alert, first_file, FinishGuard};
use crate::api::{self, ApiError};
use crate::config;
use gloo_file::File as GlooFile;
use shared::flow::video::VIDEO_ERROR_TEXT;
use shared::{Endpoints, SubmitTicket, VideoFlow, VideoPrediction};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum Msg {
    FileChosen(Option<GlooFile>),
    Submit,
    PredictionDone(SubmitTicket, Result<VideoPrediction, ApiError>),
    Finished(SubmitTicket),
}

pub struct VideoPredictor {
    flow: VideoFlow<GlooFile>,
    endpoints: Endpoints,
}

impl Component for VideoPredictor {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: VideoFlow::new(),
            endpoints: config::endpoints(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => {
                if let Some(file) = &file {
                    log::info!("Selected video {} ({} bytes)", file.name(), file.size());
                }
                self.flow.select(file);
                true
            }
            Msg::Submit => self.handle_submit(ctx),
            Msg::PredictionDone(ticket, Ok(prediction)) => {
                log::info!(
                    "Video prediction for {}: {} at {}% ({} fake / {} real frames)",
                    ticket,
                    prediction.final_prediction,
                    prediction.confidence,
                    prediction.fake_frames,
                    prediction.real_frames
                );
                self.flow.submit_success(ticket, prediction)
            }
            Msg::PredictionDone(ticket, Err(err)) => {
                log::error!("Video upload failed for {}: {}", ticket, err);
                if self.flow.submit_failure(ticket) {
                    alert(VIDEO_ERROR_TEXT);
                }
                false
            }
            Msg::Finished(ticket) => self.flow.finish(ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let loading = self.flow.loading();

        let handle_change = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FileChosen(input.files().as_ref().and_then(first_file))
        });

        html! {
            <div class="video-predictor">
                <h1 class="title">{"Deepfake Video Detection"}</h1>

                <div class="upload-container">
                    <input type="file" accept="video/*" class="file-input" onchange={handle_change} />
                    <button
                        class={classes!("submit-btn", loading.then_some("disabled"))}
                        onclick={link.callback(|_| Msg::Submit)}
                        disabled={loading}
                    >
                        { if loading { "Analyzing..." } else { "Upload & Predict" } }
                    </button>
                </div>

                if loading {
                    <div class="loader-container">
                        <div class="spinner" />
                        <p>{"Processing with AI..."}</p>
                    </div>
                }

                if let Some(result) = self.flow.result() {
                    { self.render_result(result) }
                }
            </div>
        }
    }
}

impl VideoPredictor {
    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        let Some((ticket, file)) = self.flow.begin_submit() else {
            return false;
        };

        log::info!("Submitting {} for video prediction ({})", file.name(), ticket);

        let link = ctx.link().clone();
        let endpoints = self.endpoints.clone();
        spawn_local(async move {
            let _finish = FinishGuard::new(ticket, link.callback(Msg::Finished));
            let outcome = api::predict_video(&endpoints, &file).await;
            link.send_message(Msg::PredictionDone(ticket, outcome));
        });

        true
    }

    fn render_result(&self, result: &VideoPrediction) -> Html {
        let slices = self
            .flow
            .frame_breakdown()
            .map(|pie| {
                let colors = [FAKE_COLOR, REAL_COLOR];
                pie.labels
                    .iter()
                    .zip(pie.values)
                    .zip(colors)
                    .map(|((label, value), color)| PieSlice {
                        legend: format!("{}: {}", label, value),
                        value: f64::from(value),
                        color,
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        html! {
            <div class="result-section">
                <div class="result-grid">
                    <div class="video-box">
                        <video width="50%" controls=true src={result.video_url.clone()} class="video" />
                        <h3 class={classes!("prediction", result.final_prediction.css_class())}>
                            { format!("Final Prediction: {}", result.final_prediction) }
                        </h3>
                        <p class="confidence">{ format!("Confidence: {}%", result.confidence) }</p>
                    </div>

                    <div class="chart-container">
                        <h4>{"Prediction Summary"}</h4>
                        <p class="frame-count">{ format!("{} frames analyzed", result.total_frames()) }</p>
                        <PieChart {slices} />
                    </div>
                </div>

                <h3 class="frames-title">{"Analyzed Frames"}</h3>
                <div class="frames-container">
                    { for self.flow.frames().iter().map(|frame| html! {
                        <div class="frame">
                            <img
                                src={self.endpoints.frame_url(&frame.filename)}
                                alt="frame"
                                class={classes!("frame-image", frame.label.css_class())}
                            />
                            <p class="frame-label">{ frame.label.to_string() }</p>
                        </div>
                    })}
                </div>
            </div>
        }
    }
}
