//! Timing and threshold configuration.
//!
//! Every delay and threshold the controllers use lives here so a JSON file can
//! override it. Missing keys fall back to the defaults, which are the values
//! the site ships with.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ArtfolioError, Result};

/// Interaction timings and thresholds.
///
/// Durations are stored in milliseconds so the JSON stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Vertical scroll offset (px) at which the header turns translucent
    pub header_threshold_px: f64,
    /// Lifetime of a navigation ripple
    pub ripple_ms: u64,
    /// Length of the portfolio modal exit animation
    pub modal_close_ms: u64,
    /// Simulated latency of the contact form submission
    pub contact_latency_ms: u64,
    /// Simulated latency of the newsletter signup
    pub newsletter_latency_ms: u64,
    /// Time a notification stays before its exit animation starts
    pub notification_visible_ms: u64,
    /// Length of the notification exit animation
    pub notification_exit_ms: u64,
    /// Particles per confetti burst
    pub confetti_count: usize,
    /// Fixed removal time of every confetti particle
    pub confetti_lifetime_ms: u64,
    /// Lower bound of a particle's fall duration
    pub confetti_fall_min_ms: u64,
    /// Upper bound (exclusive) of a particle's fall duration
    pub confetti_fall_max_ms: u64,
    /// Period of the artist-name hue cycle
    pub hue_cycle_ms: u64,
    /// Parallax layer speed relative to the page scroll
    pub parallax_factor: f64,
    /// Animation delay added per decorative illustration
    pub stagger_step_ms: u64,
    /// Fraction of an element that must be visible to reveal it
    pub reveal_threshold: f64,
    /// Bottom root margin (px) shrinking the reveal viewport
    pub reveal_bottom_margin_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: 100.0,
            ripple_ms: 600,
            modal_close_ms: 300,
            contact_latency_ms: 2000,
            newsletter_latency_ms: 1500,
            notification_visible_ms: 3000,
            notification_exit_ms: 300,
            confetti_count: 50,
            confetti_lifetime_ms: 5000,
            confetti_fall_min_ms: 2000,
            confetti_fall_max_ms: 5000,
            hue_cycle_ms: 5000,
            parallax_factor: 0.5,
            stagger_step_ms: 500,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50.0,
        }
    }
}

impl InteractionConfig {
    /// Load a config file, filling omitted keys with defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or invert an effect.
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("ripple_ms", self.ripple_ms),
            ("confetti_lifetime_ms", self.confetti_lifetime_ms),
            ("hue_cycle_ms", self.hue_cycle_ms),
            ("notification_visible_ms", self.notification_visible_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(ArtfolioError::InvalidConfig(format!(
                    "{} must be non-zero",
                    name
                )));
            }
        }

        if self.confetti_fall_min_ms >= self.confetti_fall_max_ms {
            return Err(ArtfolioError::InvalidConfig(format!(
                "confetti fall range {}..{} is empty",
                self.confetti_fall_min_ms, self.confetti_fall_max_ms
            )));
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ArtfolioError::InvalidConfig(format!(
                "reveal_threshold {} outside 0..=1",
                self.reveal_threshold
            )));
        }

        if !self.header_threshold_px.is_finite() || self.header_threshold_px < 0.0 {
            return Err(ArtfolioError::InvalidConfig(
                "header_threshold_px must be a non-negative number".into(),
            ));
        }

        Ok(())
    }

    pub fn ripple(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    pub fn modal_close(&self) -> Duration {
        Duration::from_millis(self.modal_close_ms)
    }

    pub fn contact_latency(&self) -> Duration {
        Duration::from_millis(self.contact_latency_ms)
    }

    pub fn newsletter_latency(&self) -> Duration {
        Duration::from_millis(self.newsletter_latency_ms)
    }

    pub fn notification_visible(&self) -> Duration {
        Duration::from_millis(self.notification_visible_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    pub fn confetti_lifetime(&self) -> Duration {
        Duration::from_millis(self.confetti_lifetime_ms)
    }

    pub fn hue_cycle(&self) -> Duration {
        Duration::from_millis(self.hue_cycle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = InteractionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.contact_latency(), Duration::from_millis(2000));
        assert_eq!(config.newsletter_latency(), Duration::from_millis(1500));
        assert_eq!(config.confetti_count, 50);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = InteractionConfig::from_json(r#"{ "contact_latency_ms": 10 }"#).unwrap();
        assert_eq!(config.contact_latency_ms, 10);
        assert_eq!(config.modal_close_ms, 300);
        assert_eq!(config.header_threshold_px, 100.0);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = InteractionConfig::from_json(r#"{ "hue_cycle_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ArtfolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_inverted_fall_range_rejected() {
        let err = InteractionConfig::from_json(
            r#"{ "confetti_fall_min_ms": 5000, "confetti_fall_max_ms": 2000 }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("fall range"));
    }

    #[test]
    fn test_malformed_json() {
        let err = InteractionConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ArtfolioError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "ripple_ms": 900, "reveal_threshold": 0.25 }}"#).unwrap();

        let config = InteractionConfig::load(file.path()).unwrap();
        assert_eq!(config.ripple(), Duration::from_millis(900));
        assert_eq!(config.reveal_threshold, 0.25);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InteractionConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ArtfolioError::Io(_)));
    }
}
