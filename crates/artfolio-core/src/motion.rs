//! Decorative motion: parallax, staggered float, hue cycling, hover tilt.

use rand::Rng;

use crate::config::InteractionConfig;
use crate::surface::Surface;

/// Transform for the parallax layer at a scroll offset.
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

/// Animation delay for the `index`-th illustration, e.g. `1.5s`.
pub fn stagger_delay(index: usize, step_ms: u64) -> String {
    let secs = (index as u64 * step_ms) as f64 / 1000.0;
    format!("{}s", secs)
}

/// Transform for a portfolio item under or away from the pointer.
pub fn hover_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-10px) scale(1.02) rotateZ(1deg)"
    } else {
        "translateY(0) scale(1) rotateZ(0deg)"
    }
}

pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(0.0..360.0)
}

pub fn hue_filter(hue: f64) -> String {
    format!("hue-rotate({:.1}deg)", hue)
}

/// Re-randomize every artist-name hue each period, forever.
///
/// The first change happens one full period after start.
pub async fn run_hue_cycle<S, R>(mut hues: S, config: &InteractionConfig, mut rng: R)
where
    S: Surface<Vec<f64>>,
    R: Rng,
{
    loop {
        tokio::time::sleep(config.hue_cycle()).await;
        hues.update(|h| {
            for hue in h.iter_mut() {
                *hue = random_hue(&mut rng);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parallax_half_speed() {
        assert_eq!(parallax_transform(300.0, 0.5), "translateY(150px)");
        assert_eq!(parallax_transform(0.0, 0.5), "translateY(0px)");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay(0, 500), "0s");
        assert_eq!(stagger_delay(1, 500), "0.5s");
        assert_eq!(stagger_delay(3, 500), "1.5s");
    }

    #[test]
    fn test_hover_reverts() {
        assert_ne!(hover_transform(true), hover_transform(false));
        assert_eq!(hover_transform(false), "translateY(0) scale(1) rotateZ(0deg)");
    }

    #[test]
    fn test_hue_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let hue = random_hue(&mut rng);
            assert!((0.0..360.0).contains(&hue));
        }
        assert_eq!(hue_filter(42.0), "hue-rotate(42.0deg)");
    }
}
