//! Success Dialog Component
//!
//! Shown after the contact form sends. Closes without an exit animation.

use artfolio_core::ModalState;
use artfolio_ui::{Button, CloseButton};
use dioxus::prelude::*;

#[component]
pub fn SuccessDialog(state: ModalState<()>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal success-modal",
            style: "display: {state.display()};",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content success-content",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| on_close.call(()) }
                h3 { class: "success-title", "Message sent!" }
                p { "Thank you for getting in touch. I'll reply within a few days." }
                Button { onclick: move |_| on_close.call(()), "Back to the page" }
            }
        }
    }
}
