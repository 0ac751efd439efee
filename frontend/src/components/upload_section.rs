use super::image_predictor::{ImagePredictor, Msg};
use super::utils::{debounce, first_file, trigger_file_input};
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const FILE_INPUT_ID: &str = "image-file-input";

pub fn render_upload_section(model: &ImagePredictor, ctx: &Context<ImagePredictor>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        // allow picking the same file again after a reset
        input.set_value("");

        file.map(Msg::FileChosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div class="upload-section">
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("drop-zone", model.flow.dragging().then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, || trigger_file_input(FILE_INPUT_ID))}
            >
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"Drag & Drop an image here, paste, or click to upload"}</p>
                <p class="file-types">{"Images up to 5MB: JPG, PNG, WEBP, GIF"}</p>
            </div>
        </div>
    }
}
