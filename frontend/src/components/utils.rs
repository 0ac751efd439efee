use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::SubmitTicket;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Only the first file of a selection, drop or paste is used.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("Failed to show alert {:?}: {:?}", message, err);
            }
        }
        None => log::warn!("No window available for alert: {}", message),
    }
}

/// Opens the native picker of a hidden `<input type="file">`.
pub fn trigger_file_input(input_id: &str) {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(input_id));

    match input.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(html_input) => html_input.click(),
        None => log::warn!("File input #{} not found", input_id),
    }
}

/// Reports the end of a submission when dropped.
///
/// Created at the top of the request task so the loading flag is released
/// however the task ends.
pub struct FinishGuard {
    ticket: SubmitTicket,
    on_finish: Callback<SubmitTicket>,
}

impl FinishGuard {
    pub fn new(ticket: SubmitTicket, on_finish: Callback<SubmitTicket>) -> Self {
        Self { ticket, on_finish }
    }
}

impl Drop for FinishGuard {
    fn drop(&mut self) {
        self.on_finish.emit(self.ticket);
    }
}
