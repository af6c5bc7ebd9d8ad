//! Webview bridge.
//!
//! Browser facts Dioxus does not surface as events (window scroll, global
//! keydown, element visibility) are forwarded from small scripts through
//! `dioxus.send`. Each listener script parks on a pending promise so its
//! channel stays open for the life of the page.

use artfolio_core::{ElementBounds, RevealRule, RevealTracker};
use dioxus::document;
use dioxus::prelude::*;
use serde::Deserialize;

const SCROLL_LISTENER: &str = r#"
const report = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', report, { passive: true });
report();
await new Promise(() => {});
"#;

const KEY_LISTENER: &str = r#"
window.addEventListener('keydown', (event) => dioxus.send(event.key));
await new Promise(() => {});
"#;

/// Observes every `[data-reveal]` element, including ones mounted later.
const REVEAL_OBSERVER: &str = r#"
const opts = await dioxus.recv();
const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
        const rect = entry.boundingClientRect;
        const rootBottom = entry.rootBounds
            ? entry.rootBounds.bottom
            : window.innerHeight - opts.margin;
        dioxus.send({ id: entry.target.id, top: rect.top, bottom: rect.bottom, root_bottom: rootBottom });
    }
}, { threshold: [0, opts.threshold], rootMargin: `0px 0px -${opts.margin}px 0px` });
const watch = (root) => {
    if (root.matches && root.matches('[data-reveal]') && root.id) observer.observe(root);
    if (root.querySelectorAll) root.querySelectorAll('[data-reveal]').forEach((el) => el.id && observer.observe(el));
};
watch(document.body);
new MutationObserver((records) => {
    for (const record of records) record.addedNodes.forEach(watch);
}).observe(document.body, { childList: true, subtree: true });
await new Promise(() => {});
"#;

#[derive(Debug, Deserialize)]
struct RevealReport {
    id: String,
    top: f64,
    bottom: f64,
    root_bottom: f64,
}

/// Track `window.scrollY`.
pub fn use_window_scroll() -> ReadOnlySignal<f64> {
    let mut offset = use_signal(|| 0.0_f64);

    use_hook(|| {
        spawn(async move {
            let mut eval = document::eval(SCROLL_LISTENER);
            while let Ok(y) = eval.recv::<f64>().await {
                if *offset.peek() != y {
                    offset.set(y);
                }
            }
            tracing::debug!("Scroll listener closed");
        })
    });

    offset.into()
}

fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Count Escape presses anywhere on the page.
///
/// Installs one window listener for the life of the calling scope, so call
/// it from the shell rather than from pages that mount and unmount.
pub fn use_escape_presses() -> ReadOnlySignal<u64> {
    let mut presses = use_signal(|| 0_u64);

    use_hook(|| {
        spawn(async move {
            let mut eval = document::eval(KEY_LISTENER);
            while let Ok(key) = eval.recv::<String>().await {
                if is_escape(&key) {
                    *presses.write() += 1;
                }
            }
            tracing::debug!("Key listener closed");
        })
    });

    presses.into()
}

/// Feed element visibility into `tracker` until every element is revealed
/// or the page goes away.
pub fn use_reveal_observer(rule: RevealRule, mut tracker: Signal<RevealTracker>) {
    use_hook(move || {
        spawn(async move {
            let mut eval = document::eval(REVEAL_OBSERVER);
            let opts = serde_json::json!({
                "threshold": rule.threshold,
                "margin": rule.bottom_margin,
            });
            if let Err(e) = eval.send(opts) {
                tracing::warn!("Reveal observer unavailable: {:?}", e);
                return;
            }

            while let Ok(report) = eval.recv::<RevealReport>().await {
                let bounds = ElementBounds {
                    top: report.top,
                    bottom: report.bottom,
                };
                let fresh = !tracker.peek().is_revealed(&report.id)
                    && rule.admits(bounds, report.root_bottom);
                if fresh {
                    tracker
                        .write()
                        .observe(&rule, &report.id, bounds, report.root_bottom);
                }
            }
        })
    });
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    let Ok(target) = serde_json::to_string(id) else {
        return;
    };
    let _ = document::eval(&format!(
        "document.getElementById({target})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    ));
}

/// Set `document.body.style.overflow`.
pub fn set_body_overflow(overflow: &str) {
    let Ok(value) = serde_json::to_string(overflow) else {
        return;
    };
    let _ = document::eval(&format!("document.body.style.overflow = {value};"));
}
