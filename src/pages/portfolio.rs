//! Portfolio page - gallery, lightbox and the Art Club signup.

use artfolio_core::{modal, Controller, LightboxView, LockOwner, ModalState, PORTFOLIO_PAGE};
use dioxus::prelude::*;

use crate::components::{
    gallery_pieces, Hero, Lightbox, NewsletterSignup, PortfolioGallery, SiteHeader,
};
use crate::context::{use_chrome, use_config, use_on_escape, use_scheduler, Live};

#[component]
pub fn Portfolio() -> Element {
    let layout = PORTFOLIO_PAGE;
    let config = use_config();
    let chrome = use_chrome();
    let scheduler = use_scheduler();
    let lightbox = use_signal(ModalState::<LightboxView>::new);

    use_hook(|| {
        tracing::info!(page = layout.name, controllers = ?layout.controllers(), "Page mounted");
    });

    let exit = config.modal_close();
    let close_lightbox = move || {
        scheduler.run(async move {
            modal::close(Live(lightbox), chrome.live(), LockOwner::PortfolioModal, exit).await;
        });
    };

    use_on_escape(move || {
        if lightbox.peek().is_open() {
            close_lightbox();
        }
    });

    // A pending close dies with this page; its lock must not outlive it.
    use_drop(move || chrome.abandon(LockOwner::PortfolioModal));

    let on_view = layout.attach(
        Controller::PortfolioModal,
        EventHandler::new(move |piece: artfolio_core::PortfolioPiece| {
            tracing::debug!("Opening lightbox for {:?}", piece.title);
            modal::open(
                Live(lightbox),
                chrome.live(),
                LockOwner::PortfolioModal,
                LightboxView::from(&piece),
            );
        }),
    );

    rsx! {
        SiteHeader { layout }
        main { class: "page portfolio-page",
            Hero { tagline: "Illustration, picture books and the occasional oil painting" }
            PortfolioGallery { pieces: gallery_pieces(), on_view }
            section { id: "about", class: "about-section",
                h2 { class: "section-title", "About" }
                p {
                    "I draw for books, magazines and walls. Most pieces start as "
                    "pencil thumbnails in a pocket sketchbook and end up in gouache, ink "
                    "or pixels, depending on where they are going to live."
                }
            }
            if layout.newsletter_form {
                NewsletterSignup {}
            }
        }
        if layout.portfolio_modal {
            Lightbox { state: lightbox(), on_close: move |_| close_lightbox() }
        }
    }
}
