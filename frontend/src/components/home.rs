use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();

    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| match &navigator {
            Some(navigator) => navigator.push(&route),
            None => log::warn!("Navigation unavailable outside a router"),
        })
    };

    html! {
        <div class="home">
            <h1>{"Welcome to "}<span class="faux-text">{"FauxBuster"}</span></h1>
            <p class="subtitle">{"AI-Powered Deepfake Detector for Unmasking Deepfakes with Precision"}</p>

            <div class="options-container">
                <div class="option-card" onclick={go_to(Route::Image)}>
                    <i class="fa-solid fa-image option-icon"></i>
                    <h2>{"Image Prediction"}</h2>
                    <p>{"Check if an image is real or AI-generated."}</p>
                </div>
                <div class="option-card" onclick={go_to(Route::Video)}>
                    <i class="fa-solid fa-video option-icon"></i>
                    <h2>{"Video Prediction"}</h2>
                    <p>{"Analyze videos for deepfake content."}</p>
                </div>
            </div>
        </div>
    }
}
