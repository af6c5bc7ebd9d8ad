//! Confetti Layer
//!
//! One fixed-position square per live particle. Each square animates with
//! `confettiFall` for its own duration; removal is driven by the particle's
//! lifetime task, not by the animation ending.

use artfolio_core::Confetti;
use dioxus::prelude::*;

#[component]
pub fn ConfettiLayer(confetti: Confetti) -> Element {
    if confetti.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "confetti-layer", "aria-hidden": "true",
            for particle in confetti.iter() {
                div {
                    key: "{particle.id}",
                    class: "confetti",
                    style: "{particle.style()}",
                }
            }
        }
    }
}
