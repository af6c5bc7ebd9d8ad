//! Lightbox Component
//!
//! Full-size view of one portfolio piece. The close button and the backdrop
//! both close it; clicks on the content do not.

use artfolio_core::{LightboxView, ModalState};
use artfolio_ui::CloseButton;
use dioxus::prelude::*;

#[component]
pub fn Lightbox(state: ModalState<LightboxView>, on_close: EventHandler<()>) -> Element {
    let Some(view) = state.content().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal",
            style: "display: {state.display()}; animation: {state.animation()};",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| on_close.call(()) }
                img {
                    class: "modal-image",
                    src: "{view.image_src}",
                    alt: "{view.image_alt}",
                }
                h3 { class: "modal-title", "{view.title}" }
                p { class: "modal-description", "{view.description}" }
            }
        }
    }
}
