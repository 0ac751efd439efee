use super::preview_area::render_preview_area;
use super::results::{render_history, render_results};
use super::upload_section::render_upload_section;
use crate::api::ApiError;
use crate::config;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{Endpoints, ImageFlow, ImagePrediction, SubmitTicket};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub enum Msg {
    // File operations
    FileChosen(GlooFile),
    Reset,

    // Analysis operations
    Predict,
    PredictionDone(SubmitTicket, Result<ImagePrediction, ApiError>),
    Finished(SubmitTicket),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

pub struct ImagePredictor {
    pub(super) flow: ImageFlow<GlooFile, ObjectUrl>,
    pub(super) endpoints: Endpoints,
    _paste_listener: Option<EventListener>,
}

impl Component for ImagePredictor {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let paste_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        Self {
            flow: ImageFlow::new(),
            endpoints: config::endpoints(),
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use super::handlers::*;

        match msg {
            Msg::FileChosen(file) => handle_file_chosen(self, file),
            Msg::Reset => handle_reset(self),

            Msg::Predict => handle_predict(self, ctx),
            Msg::PredictionDone(ticket, outcome) => handle_prediction_done(self, ticket, outcome),
            Msg::Finished(ticket) => self.flow.finish(ticket),

            Msg::SetDragging(dragging) => self.flow.set_dragging(dragging),

            Msg::HandleDrop(event) => handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="image-predictor">
                <h1>{"Deepfake Image Checker"}</h1>

                { render_upload_section(self, ctx) }
                { render_preview_area(self, ctx) }

                if self.flow.loading() {
                    <p class="analyzing">
                        <i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing with AI..."}
                    </p>
                }

                { render_results(&self.flow) }
                { render_history(&self.flow) }
            </div>
        }
    }
}
