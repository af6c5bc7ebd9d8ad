//! Newsletter Form Component
//!
//! Art Club signup. Feedback is given only through notification banners.

use artfolio_core::{newsletter, NewsletterForm};
use artfolio_ui::SubmitButton;
use dioxus::prelude::*;

use crate::context::{use_chrome, use_config, use_scheduler, Live};

#[component]
pub fn NewsletterSignup() -> Element {
    let config = use_config();
    let chrome = use_chrome();
    let scheduler = use_scheduler();
    let mut form = use_signal(NewsletterForm::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let config = config.clone();
        scheduler.run(async move {
            let outcome = newsletter::submit(Live(form), chrome.live(), &config).await;
            if let Some(id) = outcome.notification() {
                chrome.track_notification(id, &config);
            }
        });
    };

    let current = form.read().clone();

    rsx! {
        section { id: "art-club", class: "newsletter-section",
            h2 { class: "section-title", "Join the Art Club" }
            p { "Monthly sketchbook pages, process notes and first dibs on prints." }
            form { class: "newsletter-form", novalidate: true, onsubmit,
                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "you@example.com",
                    value: "{current.email}",
                    oninput: move |e| form.write().email = e.value(),
                }
                SubmitButton { control: current.submit_control().clone() }
            }
        }
    }
}
