use super::image_predictor::{ImagePredictor, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_preview_area(model: &ImagePredictor, ctx: &Context<ImagePredictor>) -> Html {
    let Some(candidate) = model.flow.candidate() else {
        return html! {};
    };

    let link = ctx.link().clone();
    let loading = model.flow.loading();

    html! {
        <div id="preview-container">
            <img
                class="preview-img"
                src={candidate.preview.to_string()}
                alt="Preview"
                title={candidate.file.name()}
            />
            <div class="buttons">
                <button
                    class="predict-btn"
                    onclick={link.callback(|_| Msg::Predict)}
                    disabled={loading}
                >
                    {
                        if loading {
                            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
                        } else {
                            html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Upload & Predict"}</> }
                        }
                    }
                </button>
                <button
                    class="reset-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Reset)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear"}
                </button>
            </div>
        </div>
    }
}
