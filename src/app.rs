use artfolio_core::style::claim_keyframes;
use artfolio_ui::{ConfettiLayer, NotificationStack};
use dioxus::prelude::*;

use crate::bridge;
use crate::context::{use_page_context_provider, EscapePresses, ScrollOffset};
use crate::pages::{Contact, Portfolio};
use crate::theme::GLOBAL_STYLES;
use crate::{get_config, get_start_page, StartPage};

/// Application routes.
///
/// - `/` - Portfolio: gallery, lightbox and the Art Club signup
/// - `/contact` - Contact form with the success dialog
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Portfolio {},
        #[route("/contact")]
        Contact {},
}

/// Root application component.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Page shell shared by every route.
///
/// Owns the page chrome (scroll lock, banners, confetti), the window
/// listeners and the one-time keyframe sheet.
#[component]
fn Shell() -> Element {
    let shell = use_page_context_provider(get_config());
    let chrome = shell.chrome.state;

    let scroll = bridge::use_window_scroll();
    use_context_provider(|| ScrollOffset(scroll));
    let escapes = bridge::use_escape_presses();
    use_context_provider(|| EscapePresses(escapes));
    bridge::use_reveal_observer(shell.rule, shell.tracker);

    // Claimed once; later mounts render nothing.
    let keyframes = use_hook(claim_keyframes);

    let overflow = use_memo(move || chrome.read().scroll_lock.overflow());
    use_effect(move || bridge::set_body_overflow(overflow()));

    let navigator = use_navigator();
    use_hook(move || {
        if get_start_page() == StartPage::Contact {
            let _ = navigator.replace(Route::Contact {});
        }
    });

    let notifications = chrome.read().notifications.clone();
    let confetti = chrome.read().confetti.clone();

    rsx! {
        if let Some(sheet) = keyframes {
            style { {sheet} }
        }
        Outlet::<Route> {}
        NotificationStack { notifications }
        ConfettiLayer { confetti }
    }
}
