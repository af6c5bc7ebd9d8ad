//! One-shot scroll reveal.
//!
//! The webview reports an element's vertical bounds and the bottom of the
//! observation root (viewport height minus the bottom margin). An element is
//! revealed the first time at least `threshold` of its height lies inside
//! the root. Nothing is ever un-revealed.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::InteractionConfig;

/// Class added to revealed elements.
pub const REVEALED_CLASS: &str = "animate-in";

/// Vertical extent of an element, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRule {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl RevealRule {
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            bottom_margin: config.reveal_bottom_margin_px,
        }
    }

    /// Bottom of the observation root for a viewport height.
    pub fn root_bottom(&self, viewport_height: f64) -> f64 {
        viewport_height - self.bottom_margin
    }

    /// Fraction of the element inside `[0, root_bottom]`.
    pub fn visible_ratio(bounds: ElementBounds, root_bottom: f64) -> f64 {
        let height = bounds.bottom - bounds.top;
        if height <= 0.0 {
            return if bounds.top >= 0.0 && bounds.top <= root_bottom {
                1.0
            } else {
                0.0
            };
        }
        let visible = bounds.bottom.min(root_bottom) - bounds.top.max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }

    pub fn admits(&self, bounds: ElementBounds, root_bottom: f64) -> bool {
        let ratio = Self::visible_ratio(bounds, root_bottom);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Elements that have been revealed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Feed an observation. Returns true only on the first crossing.
    pub fn observe(
        &mut self,
        rule: &RevealRule,
        id: &str,
        bounds: ElementBounds,
        root_bottom: f64,
    ) -> bool {
        if self.revealed.contains(id) || !rule.admits(bounds, root_bottom) {
            return false;
        }
        tracing::trace!(id, "Element revealed");
        self.revealed.insert(id.to_string())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Extra class and inline style for an observed element.
    pub fn decoration(&self, id: &str) -> (&'static str, &'static str) {
        if self.is_revealed(id) {
            (REVEALED_CLASS, "animation-play-state: running;")
        } else {
            ("", "")
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
