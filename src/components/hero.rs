//! Hero Component
//!
//! Opening section with the decorative motion: a parallax backdrop, the
//! hue-cycling artist name and floating illustrations whose animations
//! start half a second apart.

use artfolio_core::motion;
use dioxus::prelude::*;

use crate::context::{use_config, use_scheduler, use_scroll_offset, Live};

const ARTIST_NAME: &str = "Mira Okafor";

const ILLUSTRATIONS: [&str; 4] = ["\u{1F58C}", "\u{2728}", "\u{1F338}", "\u{1F319}"];

#[component]
pub fn Hero(tagline: String) -> Element {
    let config = use_config();
    let offset = use_scroll_offset();
    let parallax = motion::parallax_transform(offset(), config.parallax_factor);
    let delays: Vec<String> = (0..ILLUSTRATIONS.len())
        .map(|index| motion::stagger_delay(index, config.stagger_step_ms))
        .collect();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-parallax", style: "transform: {parallax};" }
            div { class: "hero-content",
                ArtistName {}
                p { class: "hero-tagline", "{tagline}" }
            }
            div { class: "illustrations", "aria-hidden": "true",
                for (glyph, delay) in ILLUSTRATIONS.iter().zip(delays) {
                    span {
                        key: "{glyph}",
                        class: "illustration-placeholder",
                        style: "animation-delay: {delay};",
                        "{glyph}"
                    }
                }
            }
        }
    }
}

/// One filter for the whole heading, so the gradient shifts as a unit.
fn name_style(hues: &[f64]) -> String {
    let hue = hues.first().copied().unwrap_or(0.0);
    format!("filter: {};", motion::hue_filter(hue))
}

/// Artist name that shifts hue every cycle.
#[component]
fn ArtistName() -> Element {
    let config = use_config();
    let scheduler = use_scheduler();
    let hues = use_signal(|| vec![0.0_f64]);

    use_hook(move || {
        scheduler.run(async move {
            motion::run_hue_cycle(Live(hues), &config, rand::rng()).await;
        })
    });

    let style = name_style(&hues.read());

    rsx! {
        h1 { class: "artist-name", style: "{style}", "{ARTIST_NAME}" }
    }
}
