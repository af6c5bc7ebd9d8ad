//! Portfolio Gallery Component
//!
//! Grid of portfolio pieces. Items tilt under the pointer, reveal on first
//! scroll into view and open the lightbox from their "view" trigger.

use artfolio_core::{motion, PortfolioPiece};
use artfolio_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::use_reveal_tracker;

/// Pieces shown on the portfolio page.
pub fn gallery_pieces() -> Vec<PortfolioPiece> {
    vec![
        PortfolioPiece::new(
            "Tidepool Study",
            "Gouache on cold-press paper. Low tide at Kilifi, painted on site over two mornings.",
        ),
        PortfolioPiece::new(
            "Night Market",
            "Digital illustration for a festival poster. Lantern light and a lot of noodles.",
        ),
        PortfolioPiece::new(
            "The Lighthouse Keeper's Cat",
            "Picture book spread, ink and watercolour.",
        ),
        PortfolioPiece::new(
            "Orchard in Fog",
            "Oil on linen. Part of the Seasons series.",
        ),
        PortfolioPiece::new(
            "Paper Cranes",
            "Cut paper relief, photographed under raking light.",
        ),
        PortfolioPiece::new(
            "Self Portrait with Brushes",
            "Charcoal and white chalk on toned paper.",
        ),
    ]
}

const VIEW_TRIGGER_CLASS: &str = "view-full-size";

/// Stable element id for the `index`-th gallery item.
fn item_id(index: usize) -> String {
    format!("portfolio-item-{}", index)
}

#[component]
pub fn PortfolioGallery(
    pieces: Vec<PortfolioPiece>,
    /// Lightbox opener; absent when the page has no lightbox
    #[props(default)]
    on_view: Option<EventHandler<PortfolioPiece>>,
) -> Element {
    rsx! {
        section { id: "gallery", class: "portfolio-section",
            h2 { class: "section-title", "Gallery" }
            div { class: "portfolio-grid",
                for (index, piece) in pieces.into_iter().enumerate() {
                    PortfolioCard {
                        key: "{index}",
                        id: item_id(index),
                        piece,
                        on_view,
                    }
                }
            }
        }
    }
}

#[component]
fn PortfolioCard(
    id: String,
    piece: PortfolioPiece,
    on_view: Option<EventHandler<PortfolioPiece>>,
) -> Element {
    let tracker = use_reveal_tracker();
    let mut hovered = use_signal(|| false);
    let mut selected = use_signal(|| false);

    let (reveal_class, reveal_style) = tracker.read().decoration(&id);
    let transform = motion::hover_transform(hovered());
    let selected_class = if selected() { "selected" } else { "" };
    let initial = piece.title.chars().next().unwrap_or('?');

    let view = {
        let piece = piece.clone();
        move |e: MouseEvent| {
            // The card's own click handler must not see this click.
            e.stop_propagation();
            if let Some(handler) = &on_view {
                handler.call(piece.clone());
            }
        }
    };

    rsx! {
        article {
            id: "{id}",
            class: "portfolio-item {reveal_class} {selected_class}",
            style: "transform: {transform}; {reveal_style}",
            "data-reveal": "true",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |_| selected.toggle(),
            div { class: "portfolio-art",
                span { class: "portfolio-initial", "{initial}" }
            }
            div { class: "portfolio-caption",
                h3 { class: "portfolio-title", "{piece.title}" }
                p { class: "portfolio-description", "{piece.description}" }
            }
            if on_view.is_some() {
                Button {
                    variant: ButtonVariant::Ghost,
                    class: VIEW_TRIGGER_CLASS.to_string(),
                    onclick: view,
                    "View full size"
                }
            }
        }
    }
}
