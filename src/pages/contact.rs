//! Contact page - commission form, success dialog and studio details.

use artfolio_core::{modal, Controller, LockOwner, ModalState, CONTACT_PAGE};
use dioxus::prelude::*;

use crate::components::{ContactDetails, ContactFormPanel, Hero, SiteHeader, SuccessDialog};
use crate::context::{use_chrome, Live};

#[component]
pub fn Contact() -> Element {
    let layout = CONTACT_PAGE;
    let chrome = use_chrome();
    let success = use_signal(ModalState::<()>::new);

    use_hook(|| {
        tracing::info!(page = layout.name, controllers = ?layout.controllers(), "Page mounted");
    });

    use_drop(move || chrome.abandon(LockOwner::SuccessDialog));

    let close_success = move |_| {
        modal::close_now(Live(success), chrome.live(), LockOwner::SuccessDialog);
    };

    rsx! {
        SiteHeader { layout }
        main { class: "page contact-page",
            Hero { tagline: "Commissions are open for spring" }
            if layout.has(Controller::ContactForm) {
                ContactFormPanel { success: layout.success_dialog.then_some(success) }
            }
            ContactDetails {}
        }
        if layout.success_dialog {
            SuccessDialog { state: success(), on_close: close_success }
        }
    }
}
