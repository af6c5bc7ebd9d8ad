//! Celebratory confetti burst.
//!
//! Each particle falls for a random duration in
//! `confetti_fall_min_ms..confetti_fall_max_ms` but is removed on a fixed
//! `confetti_lifetime_ms` timer. With the default range the lifetime equals
//! the upper fall bound, so a slow particle can lose at most its last frame.

use std::time::Duration;

use rand::Rng;
use ulid::Ulid;

use crate::chrome::PageChrome;
use crate::config::InteractionConfig;
use crate::surface::Surface;

/// Particle colours.
pub const PALETTE: [&str; 6] = [
    "#8B5CF6", "#F97316", "#3B82F6", "#10B981", "#EF4444", "#F59E0B",
];

/// Unique identifier for a confetti particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(Ulid);

impl ParticleId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ParticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "particle_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub color: &'static str,
    /// Horizontal start, in viewport widths (0..100)
    pub left_vw: f64,
    pub fall: Duration,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &InteractionConfig) -> Self {
        let fall_ms = rng.random_range(config.confetti_fall_min_ms..config.confetti_fall_max_ms);
        Self {
            id: ParticleId::new(),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            left_vw: rng.random_range(0.0..100.0),
            fall: Duration::from_millis(fall_ms),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: fixed; width: 10px; height: 10px; background: {}; left: {:.2}vw; \
             top: -10px; z-index: 3000; pointer-events: none; \
             animation: confettiFall {:.3}s linear forwards;",
            self.color,
            self.left_vw,
            self.fall.as_secs_f64()
        )
    }
}

/// Particles currently in the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    /// Spawn `count` random particles and return their ids.
    pub fn burst<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &InteractionConfig,
    ) -> Vec<ParticleId> {
        let fresh: Vec<Particle> = (0..config.confetti_count)
            .map(|_| Particle::random(rng, config))
            .collect();
        let ids = fresh.iter().map(|p| p.id).collect();
        self.particles.extend(fresh);
        tracing::debug!(count = config.confetti_count, "Confetti burst");
        ids
    }

    pub fn insert(&mut self, particle: Particle) -> ParticleId {
        let id = particle.id;
        self.particles.push(particle);
        id
    }

    pub fn remove(&mut self, id: ParticleId) -> bool {
        let before = self.particles.len();
        self.particles.retain(|p| p.id != id);
        before != self.particles.len()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Remove a particle once its fixed lifetime elapses.
pub async fn run_lifetime<C: Surface<PageChrome>>(
    mut chrome: C,
    id: ParticleId,
    config: &InteractionConfig,
) {
    tokio::time::sleep(config.confetti_lifetime()).await;
    chrome.update(|c| c.confetti.remove(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_respects_ranges() {
        let config = InteractionConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut confetti = Confetti::default();

        let ids = confetti.burst(&mut rng, &config);
        assert_eq!(ids.len(), 50);
        assert_eq!(confetti.len(), 50);

        for p in confetti.iter() {
            assert!(PALETTE.contains(&p.color));
            assert!((0.0..100.0).contains(&p.left_vw));
            assert!(p.fall >= Duration::from_secs(2));
            assert!(p.fall < Duration::from_secs(5));
            assert!(p.fall <= config.confetti_lifetime());
        }
    }

    #[test]
    fn test_style_mentions_animation() {
        let particle = Particle {
            id: ParticleId::new(),
            color: PALETTE[0],
            left_vw: 12.5,
            fall: Duration::from_millis(2500),
        };
        let style = particle.style();
        assert!(style.contains("background: #8B5CF6"));
        assert!(style.contains("left: 12.50vw"));
        assert!(style.contains("confettiFall 2.500s"));
    }

    #[test]
    fn test_remove_single_particle() {
        let config = InteractionConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut confetti = Confetti::default();
        let ids = confetti.burst(&mut rng, &config);

        assert!(confetti.remove(ids[3]));
        assert!(confetti.get(ids[3]).is_none());
        assert_eq!(confetti.len(), 49);
    }
}
