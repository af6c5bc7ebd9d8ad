//! Site Header Component
//!
//! Fixed header whose background turns translucent once the page scrolls
//! past the configured threshold. Every nav link draws a ripple where it
//! was clicked; same-page links scroll smoothly to their section.

use std::rc::Rc;

use artfolio_core::{nav, HeaderStyle, PageLayout, Ripple, RippleSet};
use artfolio_ui::RippleLayer;
use dioxus::prelude::*;

use crate::app::Route;
use crate::bridge;
use crate::context::{use_config, use_scheduler, use_scroll_offset, Live};

const LOGO_HREF: &str = "#home";

/// Where a nav link leads.
#[derive(Clone, PartialEq, Debug)]
pub enum NavTarget {
    /// `#id` on the current page
    Anchor(&'static str),
    /// Another route
    Page(Route),
}

impl NavTarget {
    fn href(&self) -> String {
        match self {
            NavTarget::Anchor(href) => href.to_string(),
            NavTarget::Page(route) => route.to_string(),
        }
    }
}

/// Links shown for a page.
fn nav_items(layout: &PageLayout) -> Vec<(&'static str, NavTarget)> {
    if layout.contact_form {
        vec![
            ("Portfolio", NavTarget::Page(Route::Portfolio {})),
            ("Write to Me", NavTarget::Anchor("#contact-form")),
            ("Studio", NavTarget::Anchor("#details")),
        ]
    } else {
        vec![
            ("Home", NavTarget::Anchor("#home")),
            ("Gallery", NavTarget::Anchor("#gallery")),
            ("About", NavTarget::Anchor("#about")),
            ("Art Club", NavTarget::Anchor("#art-club")),
            ("Contact", NavTarget::Page(Route::Contact {})),
        ]
    }
}

/// Smooth-scroll to `href` instead of jumping, if it names a section on
/// this page.
fn follow_anchor(e: &MouseEvent, href: &str, sections: &[&'static str]) {
    if let Some(id) = nav::resolve_anchor(href, sections) {
        e.prevent_default();
        bridge::scroll_into_view(id);
    }
}

#[component]
pub fn SiteHeader(layout: PageLayout) -> Element {
    let config = use_config();
    let offset = use_scroll_offset();
    let style = HeaderStyle::for_offset(offset(), config.header_threshold_px);
    let sections = layout.sections;

    rsx! {
        header { class: "site-header", style: "{style.css()}",
            a {
                class: "site-logo",
                href: LOGO_HREF,
                onclick: move |e: MouseEvent| follow_anchor(&e, LOGO_HREF, sections),
                "Mira Okafor"
            }
            nav { class: "site-nav",
                for (label, target) in nav_items(&layout) {
                    NavLink {
                        key: "{label}",
                        label,
                        target,
                        sections: layout.sections,
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(label: &'static str, target: NavTarget, sections: &'static [&'static str]) -> Element {
    let config = use_config();
    let scheduler = use_scheduler();
    let navigator = use_navigator();
    let ripples = use_signal(RippleSet::default);
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let href = target.href();

    let onclick = {
        let target = target.clone();
        move |e: MouseEvent| {
            let point = e.element_coordinates();
            let config = config.clone();
            scheduler.run(async move {
                let Some(node) = mounted.peek().clone() else {
                    return;
                };
                let Ok(rect) = node.get_client_rect().await else {
                    return;
                };
                let ripple = Ripple::at(point.x, point.y, rect.size.width, rect.size.height);
                let mut set = ripples;
                let id = set.write().push(ripple);
                nav::run_ripple(Live(ripples), id, &config).await;
            });

            match &target {
                NavTarget::Anchor(href) => follow_anchor(&e, href, sections),
                NavTarget::Page(route) => {
                    e.prevent_default();
                    navigator.push(route.clone());
                }
            }
        }
    };

    rsx! {
        a {
            class: "nav-link",
            href: "{href}",
            onmounted: move |e: MountedEvent| mounted.set(Some(e.data())),
            onclick,
            "{label}"
            RippleLayer { ripples: ripples() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artfolio_core::{CONTACT_PAGE, PORTFOLIO_PAGE};

    #[test]
    fn test_anchor_items_point_at_page_sections() {
        for layout in [PORTFOLIO_PAGE, CONTACT_PAGE] {
            for (label, target) in nav_items(&layout) {
                if let NavTarget::Anchor(href) = target {
                    assert!(
                        nav::resolve_anchor(href, layout.sections).is_some(),
                        "{} on {} points nowhere",
                        label,
                        layout.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_logo_scrolls_to_hero_on_every_page() {
        for layout in [PORTFOLIO_PAGE, CONTACT_PAGE] {
            assert_eq!(
                nav::resolve_anchor(LOGO_HREF, layout.sections),
                Some("home"),
                "logo on {}",
                layout.name
            );
        }
    }

    #[test]
    fn test_page_hrefs() {
        assert_eq!(NavTarget::Page(Route::Contact {}).href(), "/contact");
        assert_eq!(NavTarget::Anchor("#gallery").href(), "#gallery");
    }
}
