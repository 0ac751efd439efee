use super::image_predictor::{ImagePredictor, Msg};
use super::utils::{alert, first_file, FinishGuard};
use crate::api::{self, ApiError};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ImagePrediction, SubmitTicket, UploadCandidate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut ImagePredictor, file: GlooFile) -> bool {
    let name = file.name();
    let mime = file.raw_mime_type();
    let size = file.size();

    let selected = model.flow.select(&mime, size, move || {
        let preview = ObjectUrl::from(file.clone());
        UploadCandidate { file, preview }
    });

    match selected {
        Ok(()) => {
            log::info!("Selected image {} ({}, {} bytes)", name, mime, size);
            true
        }
        Err(err) => {
            log::warn!("Rejected file {}: {:?}", name, err);
            alert(&err.to_string());
            false
        }
    }
}

pub fn handle_reset(model: &mut ImagePredictor) -> bool {
    model.flow.reset();
    true
}

pub fn handle_drop(model: &mut ImagePredictor, ctx: &Context<ImagePredictor>, event: DragEvent) -> bool {
    event.prevent_default();
    event.stop_propagation();
    model.flow.set_dragging(false);

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file)
    {
        ctx.link().send_message(Msg::FileChosen(file));
    }

    true
}

pub fn handle_paste(ctx: &Context<ImagePredictor>, event: ClipboardEvent) -> bool {
    let file = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file);

    if let Some(file) = file {
        event.prevent_default();
        ctx.link().send_message(Msg::FileChosen(file));
    }
    false
}

pub fn handle_predict(model: &mut ImagePredictor, ctx: &Context<ImagePredictor>) -> bool {
    let Some((ticket, file)) = model.flow.begin_submit() else {
        return false;
    };

    log::info!("Submitting {} for image prediction ({})", file.name(), ticket);
    send_prediction_request(ctx, model.endpoints.clone(), ticket, file);
    true
}

fn send_prediction_request(
    ctx: &Context<ImagePredictor>,
    endpoints: shared::Endpoints,
    ticket: SubmitTicket,
    file: GlooFile,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let _finish = FinishGuard::new(ticket, link.callback(Msg::Finished));
            let outcome = api::predict_image(&endpoints, &file).await;
            link.send_message(Msg::PredictionDone(ticket, outcome));
        }
    });
}

pub fn handle_prediction_done(
    model: &mut ImagePredictor,
    ticket: SubmitTicket,
    outcome: Result<ImagePrediction, ApiError>,
) -> bool {
    match outcome {
        Ok(prediction) => {
            log::info!(
                "Image prediction for {}: {} ({:?})",
                ticket,
                prediction.prediction,
                prediction.probability
            );
            model.flow.submit_success(ticket, prediction)
        }
        Err(err) => {
            log::error!("Prediction error for {}: {}", ticket, err);
            model.flow.submit_failure(ticket)
        }
    }
}
