use super::theme_toggle::{Theme, ThemeToggle};
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Top navigation bar shared by every route.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-logo"><i class="fa-solid fa-robot nav-icon"></i>{" FauxBuster"}</div>
            <ul class="navbar-links">
                <li><Link<Route> to={Route::Home}><i class="fa-solid fa-house"></i>{" Home"}</Link<Route>></li>
                <li><Link<Route> to={Route::Image}><i class="fa-solid fa-image"></i>{" Image Prediction"}</Link<Route>></li>
                <li><Link<Route> to={Route::Video}><i class="fa-solid fa-video"></i>{" Video Prediction"}</Link<Route>></li>
            </ul>
            <ThemeToggle theme={props.theme} on_toggle={props.on_toggle.clone()} />
        </nav>
    }
}
