//! Ripple Layer
//!
//! Click feedback for navigation links. The layer sits inside the link
//! (which must be `position: relative; overflow: hidden`) and draws every
//! live ripple with the `.ripple` class.

use artfolio_core::RippleSet;
use dioxus::prelude::*;

#[component]
pub fn RippleLayer(ripples: RippleSet) -> Element {
    rsx! {
        for ripple in ripples.iter() {
            span {
                key: "{ripple.id}",
                class: "ripple",
                style: "{ripple.style()}",
            }
        }
    }
}
