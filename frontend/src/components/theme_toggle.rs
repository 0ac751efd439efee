use crate::config::THEME_STORAGE_KEY;
use gloo_storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme chosen earlier in this tab, if any.
    pub fn load() -> Self {
        SessionStorage::get(THEME_STORAGE_KEY).unwrap_or_default()
    }

    pub fn store(self) {
        if let Err(err) = SessionStorage::set(THEME_STORAGE_KEY, self) {
            log::warn!("Failed to store theme: {}", err);
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(self) -> Option<&'static str> {
        (self == Theme::Dark).then_some("dark-mode")
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    let light = props.theme == Theme::Light;

    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            {onclick}
            title={ if light { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
        >
            { if light {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/2600.svg" alt="Sun Icon" class="toggle-icon" /> }
            } else {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f319.svg" alt="Moon Icon" class="toggle-icon" /> }
            }}
        </button>
    }
}
