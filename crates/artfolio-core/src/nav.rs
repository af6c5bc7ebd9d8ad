//! Navigation chrome: header style, in-page anchors and click ripples.

use ulid::Ulid;

use crate::config::InteractionConfig;
use crate::surface::Surface;

/// Header appearance for a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Opaque,
    Translucent,
}

impl HeaderStyle {
    /// Pure function of the offset; recomputed on every scroll event.
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y >= threshold {
            HeaderStyle::Translucent
        } else {
            HeaderStyle::Opaque
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            HeaderStyle::Opaque => "#ffffff",
            HeaderStyle::Translucent => "rgba(255, 255, 255, 0.95)",
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            HeaderStyle::Opaque => "none",
            HeaderStyle::Translucent => "blur(10px)",
        }
    }

    pub fn css(&self) -> String {
        format!(
            "background: {}; backdrop-filter: {};",
            self.background(),
            self.backdrop_filter()
        )
    }
}

/// Resolve a same-page link (`#id`) against the sections the page renders.
///
/// `None` means the click is left to the default behaviour.
pub fn resolve_anchor<'a>(href: &'a str, sections: &[&str]) -> Option<&'a str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || !sections.contains(&id) {
        return None;
    }
    Some(id)
}

/// Unique identifier for a ripple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RippleId(Ulid);

impl std::fmt::Display for RippleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ripple_{}", self.0)
    }
}

/// Circle covering the clicked element, centred on the click point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// `click_x`/`click_y` are relative to the element's top-left corner.
    pub fn at(click_x: f64, click_y: f64, width: f64, height: f64) -> Self {
        let size = width.max(height);
        Self {
            id: RippleId(Ulid::new()),
            size,
            left: click_x - size / 2.0,
            top: click_y - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// Ripples currently attached to one link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RippleSet {
    ripples: Vec<Ripple>,
}

impl RippleSet {
    pub fn push(&mut self, ripple: Ripple) -> RippleId {
        let id = ripple.id;
        self.ripples.push(ripple);
        id
    }

    pub fn remove(&mut self, id: RippleId) -> bool {
        let before = self.ripples.len();
        self.ripples.retain(|r| r.id != id);
        before != self.ripples.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}

/// Remove a ripple after its animation.
pub async fn run_ripple<S: Surface<RippleSet>>(mut set: S, id: RippleId, config: &InteractionConfig) {
    tokio::time::sleep(config.ripple()).await;
    set.update(|s| s.remove(id));
}
