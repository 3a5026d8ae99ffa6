//! Rising heart particles for the background layer

use rand::Rng;
use std::time::Duration;

/// Size at or above which a heart is drawn with the filled glyph
const LARGE_SIZE: f64 = 25.0;

/// One decorative heart, fixed once generated
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientParticle {
    /// Horizontal position as a percentage of the width, in [0, 100)
    pub left_percent: f64,
    /// Nominal size, in [15, 35)
    pub size: f64,
    /// Seconds for one bottom-to-top rise, in [7, 15)
    pub duration: f64,
    /// Seconds before the first rise starts, in [0, 5)
    pub delay: f64,
}

impl AmbientParticle {
    /// Draw a particle with uniformly random attributes
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_percent: rng.gen_range(0.0..100.0),
            size: rng.gen_range(15.0..35.0),
            duration: rng.gen_range(7.0..15.0),
            delay: rng.gen_range(0.0..5.0),
        }
    }

    /// Generate a batch of `count` particles
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Self> {
        (0..count).map(|_| Self::random(rng)).collect()
    }

    /// Fraction of the current rise completed, or `None` while still
    /// waiting out the initial delay
    pub fn rise_progress(&self, elapsed: Duration) -> Option<f64> {
        let t = elapsed.as_secs_f64() - self.delay;
        if t < 0.0 {
            return None;
        }
        Some((t % self.duration) / self.duration)
    }

    /// Column for an area `width` cells wide
    pub fn column(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let col = (self.left_percent / 100.0 * f64::from(width)) as u16;
        col.min(width - 1)
    }

    /// Row offset from the top for an area `height` cells tall, rising
    /// from the bottom row to the top row
    pub fn row(&self, height: u16, elapsed: Duration) -> Option<u16> {
        if height == 0 {
            return None;
        }
        let progress = self.rise_progress(elapsed)?;
        let travelled = (progress * f64::from(height)) as u16;
        Some(height - 1 - travelled.min(height - 1))
    }

    pub fn glyph(&self) -> &'static str {
        if self.size >= LARGE_SIZE {
            "♥"
        } else {
            "♡"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn particle(delay: f64, duration: f64) -> AmbientParticle {
        AmbientParticle {
            left_percent: 50.0,
            size: 20.0,
            duration,
            delay,
        }
    }

    #[test]
    fn test_random_attributes_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for p in AmbientParticle::generate(500, &mut rng) {
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((15.0..35.0).contains(&p.size));
            assert!((7.0..15.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_hidden_during_delay() {
        let p = particle(2.0, 10.0);
        assert_eq!(p.rise_progress(Duration::from_secs(1)), None);
        assert_eq!(p.row(20, Duration::from_secs(1)), None);
    }

    #[test]
    fn test_rises_from_bottom_and_loops() {
        let p = particle(0.0, 10.0);
        assert_eq!(p.row(20, Duration::ZERO), Some(19));
        assert_eq!(p.row(20, Duration::from_secs(5)), Some(9));
        // Next loop starts over at the bottom
        assert_eq!(p.row(20, Duration::from_secs(10)), Some(19));
    }

    #[test]
    fn test_column_stays_inside_area() {
        let mut p = particle(0.0, 10.0);
        p.left_percent = 99.99;
        assert_eq!(p.column(80), 79);
        assert_eq!(p.column(0), 0);
        p.left_percent = 0.0;
        assert_eq!(p.column(80), 0);
    }
}
