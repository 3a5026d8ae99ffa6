//! Background layer of rising hearts
//!
//! The particle set is generated on first render and then kept as-is for
//! the lifetime of the layer.

use crate::models::AmbientParticle;
use rand::{rngs::SmallRng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use std::cell::OnceCell;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AmbientLayer {
    count: usize,
    seed: Option<u64>,
    particles: OnceCell<Vec<AmbientParticle>>,
    mounted_at: OnceCell<Instant>,
}

impl AmbientLayer {
    /// Layer of `count` hearts seeded from OS entropy
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            particles: OnceCell::new(),
            mounted_at: OnceCell::new(),
        }
    }

    /// Layer with a fixed seed, for reproducible layouts
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(count)
        }
    }

    /// Whether the particle set has been generated yet
    pub fn is_generated(&self) -> bool {
        self.particles.get().is_some()
    }

    /// The particle set, generated on first access
    pub fn particles(&self) -> &[AmbientParticle] {
        self.particles.get_or_init(|| {
            let mut rng = match self.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            AmbientParticle::generate(self.count, &mut rng)
        })
    }

    /// Draw the hearts into the frame behind everything else
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let elapsed = self.mounted_at.get_or_init(Instant::now).elapsed();
        self.render_at(f.buffer_mut(), area, elapsed);
    }

    /// Draw the hearts as they are `elapsed` after mount
    pub fn render_at(&self, buf: &mut Buffer, area: Rect, elapsed: Duration) {
        for particle in self.particles() {
            let Some(row) = particle.row(area.height, elapsed) else {
                continue;
            };
            let x = area.x + particle.column(area.width);
            let y = area.y + row;
            let style = if particle.size >= 25.0 {
                Style::default().fg(Color::LightRed)
            } else {
                Style::default().fg(Color::LightRed).add_modifier(Modifier::DIM)
            };
            buf.get_mut(x, y).set_symbol(particle.glyph()).set_style(style);
        }
    }
}
