mod api;
mod components;
mod config;
mod route;

use components::header::Navbar;
use components::theme_toggle::Theme;
use route::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(Theme::load);

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            next.store();
            theme.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <div class={classes!("app", theme.css_class())}>
                <Navbar theme={*theme} {on_toggle} />

                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>

                <footer class="app-footer">
                    <p>{"FauxBuster | AI-Powered Deepfake Detection"}</p>
                </footer>
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
