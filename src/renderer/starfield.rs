//! Scrolling starfield background
//!
//! Stars are generated once from a seed and drift downward with wall-clock
//! time, wrapping at the bottom edge. Purely visual; the simulation never
//! sees them.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shapes;
use super::vertex::{Vertex, colors};

/// Scroll speed in pixels per millisecond
const SCROLL_SPEED: f64 = 0.05;
/// Largest star edge length in pixels
const MAX_STAR_SIZE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Star {
    /// Position as a fraction of the canvas size (0..1)
    x: f32,
    y: f32,
    size: f32,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.random::<f32>(),
                y: rng.random::<f32>(),
                size: rng.random_range(0.5..MAX_STAR_SIZE),
            })
            .collect();
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Star quads for a `width` × `height` canvas at `time_ms`
    pub fn vertices(&self, width: f32, height: f32, time_ms: f64, scroll: bool) -> Vec<Vertex> {
        let offset = if scroll {
            (time_ms * SCROLL_SPEED).rem_euclid(height as f64) as f32
        } else {
            0.0
        };

        let mut vertices = Vec::with_capacity(self.stars.len() * 6);
        for star in &self.stars {
            let x = star.x * width;
            let y = (star.y * height + offset).rem_euclid(height);
            vertices.extend(shapes::rect(
                glam::Vec2::new(x, y),
                glam::Vec2::splat(star.size),
                colors::STAR,
            ));
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sky() {
        let a = Starfield::new(42, 50);
        let b = Starfield::new(42, 50);
        assert_eq!(a.stars, b.stars);
        assert_ne!(a.stars, Starfield::new(43, 50).stars);
    }

    #[test]
    fn test_stars_stay_on_canvas_while_scrolling() {
        let field = Starfield::new(7, 100);
        for time in [0.0, 1234.5, 99_999.0] {
            let verts = field.vertices(800.0, 600.0, time, true);
            assert_eq!(verts.len(), 600);
            for v in verts.iter().step_by(6) {
                assert!((0.0..800.0).contains(&v.position[0]));
                assert!((0.0..600.0).contains(&v.position[1]));
            }
        }
    }

    #[test]
    fn test_static_when_not_scrolling() {
        let field = Starfield::new(7, 10);
        assert_eq!(
            field.vertices(800.0, 600.0, 0.0, false),
            field.vertices(800.0, 600.0, 5000.0, false)
        );
    }

    #[test]
    fn test_empty_field() {
        let field = Starfield::new(1, 0);
        assert!(field.is_empty());
        assert!(field.vertices(800.0, 600.0, 0.0, true).is_empty());
    }
}
