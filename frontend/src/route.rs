use crate::components::home::Home;
use crate::components::image_predictor::ImagePredictor;
use crate::components::video_predictor::VideoPredictor;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/image")]
    Image,
    #[at("/video")]
    Video,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Image => html! { <ImagePredictor /> },
        Route::Video => html! { <VideoPredictor /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </div>
        },
    }
}
