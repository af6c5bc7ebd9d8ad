//! Contact Details Component
//!
//! Studio details shown beside the contact form. Each item fades in the
//! first time it scrolls into view.

use dioxus::prelude::*;

use crate::context::use_reveal_tracker;

const DETAILS: [(&str, &str); 4] = [
    ("Studio", "Unit 4, Printworks Lane, Bristol"),
    ("Email", "studio@miraokafor.art"),
    ("Hours", "Tuesday to Friday, 10:00 to 17:00"),
    ("Response time", "Usually within three working days"),
];

#[component]
pub fn ContactDetails() -> Element {
    rsx! {
        section { id: "details", class: "details-section",
            h2 { class: "section-title", "Studio details" }
            div { class: "contact-items",
                for (index, (label, value)) in DETAILS.iter().enumerate() {
                    ContactItem {
                        key: "{index}",
                        id: format!("contact-item-{}", index),
                        label: *label,
                        value: *value,
                    }
                }
            }
        }
    }
}

#[component]
fn ContactItem(id: String, label: &'static str, value: &'static str) -> Element {
    let tracker = use_reveal_tracker();
    let (class, style) = tracker.read().decoration(&id);

    rsx! {
        div {
            id: "{id}",
            class: "contact-item {class}",
            style: "{style}",
            "data-reveal": "true",
            h4 { "{label}" }
            p { "{value}" }
        }
    }
}
