use crate::rng::SeededRng;
use asteroids_common::Color;
use glam::Vec3;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Star {
    pub position: Vec3,
    pub color: Color,
}

/// Static backdrop of stars scattered through the flight volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` stars uniformly in `[-half_extent, half_extent)` per axis.
    /// Even stars are white, odd ones blue.
    pub fn generate(count: usize, half_extent: f32, rng: &mut SeededRng) -> Self {
        let span = half_extent * 2.0;
        let mut coord = || rng.next_f32() * span - half_extent;
        let stars = (0..count)
            .map(|i| Star {
                position: Vec3::new(coord(), coord(), coord()),
                color: if i % 2 == 0 { Color::WHITE } else { Color::BLUE },
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_the_volume() {
        let field = Starfield::generate(100, 5.0, &mut SeededRng::new(1));
        assert_eq!(field.len(), 100);
        for star in field.stars() {
            for c in star.position.to_array() {
                assert!((-5.0..5.0).contains(&c));
            }
        }
    }

    #[test]
    fn tints_alternate() {
        let field = Starfield::generate(4, 5.0, &mut SeededRng::new(1));
        let colors: Vec<Color> = field.stars().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::WHITE, Color::BLUE, Color::WHITE, Color::BLUE]);
    }

    #[test]
    fn seeded_generation_repeats() {
        let a = Starfield::generate(10, 5.0, &mut SeededRng::new(77));
        let b = Starfield::generate(10, 5.0, &mut SeededRng::new(77));
        assert_eq!(a, b);
    }
}
