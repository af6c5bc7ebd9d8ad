//! Contact Form Component
//!
//! Commission enquiry form. Fields are validated on submit; a passing
//! submission shows the pending button for the simulated send, then clears
//! the form, opens the success dialog and throws confetti.

use artfolio_core::{contact, ContactField, ContactForm, ContactOutcome, ModalState};
use artfolio_ui::{SelectField, SubmitButton, TextAreaField, TextField};
use dioxus::prelude::*;

use crate::context::{use_chrome, use_config, use_scheduler, Live};

/// Commission types offered in the project select.
const PROJECT_TYPES: [(&str, &str); 4] = [
    ("book", "Book illustration"),
    ("editorial", "Editorial"),
    ("portrait", "Portrait commission"),
    ("other", "Something else"),
];

#[component]
pub fn ContactFormPanel(
    /// Success dialog to open after sending, if the page has one
    #[props(default)]
    success: Option<Signal<ModalState<()>>>,
) -> Element {
    let config = use_config();
    let chrome = use_chrome();
    let scheduler = use_scheduler();
    let mut form = use_signal(ContactForm::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let config = config.clone();
        scheduler.run(async move {
            let outcome = contact::submit(
                Live(form),
                success.map(Live),
                chrome.live(),
                &config,
                rand::rng(),
            )
            .await;

            match outcome {
                ContactOutcome::Sent { particles } => chrome.track_particles(particles, &config),
                ContactOutcome::Rejected(errors) => {
                    tracing::debug!("Contact form has {} invalid fields", errors.len());
                }
                ContactOutcome::Busy => tracing::debug!("Contact form already sending"),
            }
        });
    };

    let current = form.read().clone();
    let errors = current.errors();
    let options: Vec<(String, String)> = PROJECT_TYPES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    rsx! {
        section { id: "contact-form", class: "contact-section",
            h2 { class: "section-title", "Tell me about your project" }
            form { class: "contact-form", novalidate: true, onsubmit,
                TextField {
                    name: ContactField::Name.name().to_string(),
                    label: "Name",
                    value: current.value(ContactField::Name).to_string(),
                    oninput: move |v: String| form.write().set(ContactField::Name, v),
                    error: errors.get(ContactField::Name),
                }
                TextField {
                    name: ContactField::Email.name().to_string(),
                    label: "Email",
                    input_type: "email",
                    value: current.value(ContactField::Email).to_string(),
                    oninput: move |v: String| form.write().set(ContactField::Email, v),
                    error: errors.get(ContactField::Email),
                }
                SelectField {
                    name: ContactField::ProjectType.name().to_string(),
                    label: "Project type",
                    value: current.value(ContactField::ProjectType).to_string(),
                    onchange: move |v: String| form.write().set(ContactField::ProjectType, v),
                    options,
                    error: errors.get(ContactField::ProjectType),
                }
                TextAreaField {
                    name: ContactField::Message.name().to_string(),
                    label: "Message",
                    value: current.value(ContactField::Message).to_string(),
                    oninput: move |v: String| form.write().set(ContactField::Message, v),
                    placeholder: "Size, deadline, anything you already have in mind",
                    error: errors.get(ContactField::Message),
                }
                SubmitButton { control: current.submit_control().clone() }
            }
        }
    }
}
