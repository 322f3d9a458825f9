//! Deterministic background star shell.
//!
//! Stars are spread uniformly over sphere directions at a random radius
//! between the inner and outer shell, with size and brightness jitter.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::options::StarfieldOptions;

/// One background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// World position on the shell.
    pub position: Vec3,
    /// Point size.
    pub size: f32,
    /// Brightness in `[0.5, 1.0]`.
    pub brightness: f32,
}

/// Generated star catalog.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Generate `options.count` stars from `options.seed`.
    #[must_use]
    pub fn generate(options: &StarfieldOptions) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
        let (inner, outer) = ordered(options.inner_radius, options.outer_radius);
        let (min_size, max_size) = ordered(options.min_size, options.max_size);

        let stars = (0..options.count)
            .map(|_| {
                let theta = rng.random::<f32>() * TAU;
                let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
                let direction = Vec3::new(
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                );
                let radius = lerp(inner, outer, rng.random());
                Star {
                    position: direction * radius,
                    size: lerp(min_size, max_size, rng.random()),
                    brightness: 0.5 + 0.5 * rng.random::<f32>(),
                }
            })
            .collect();

        Self { stars }
    }

    /// All stars.
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Positions flattened as `x, y, z` triples for a vertex buffer.
    #[must_use]
    pub fn positions(&self) -> Vec<f32> {
        self.stars
            .iter()
            .flat_map(|s| s.position.to_array())
            .collect()
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_seed() {
        let opts = StarfieldOptions::default();
        let a = Starfield::generate(&opts);
        let b = Starfield::generate(&opts);
        assert_eq!(a.stars(), b.stars());
        assert_eq!(a.stars().len(), 2000);

        let c = Starfield::generate(&StarfieldOptions {
            seed: 7,
            ..opts
        });
        assert_ne!(a.stars(), c.stars());
    }

    #[test]
    fn stars_stay_inside_shell() {
        let opts = StarfieldOptions::default();
        for star in Starfield::generate(&opts).stars() {
            let r = star.position.length();
            assert!(r >= opts.inner_radius - 1e-3 && r <= opts.outer_radius + 1e-3);
            assert!((opts.min_size..=opts.max_size).contains(&star.size));
        }
    }

    #[test]
    fn swapped_bounds_are_tolerated() {
        let opts = StarfieldOptions {
            count: 50,
            inner_radius: 10.0,
            outer_radius: 5.0,
            ..StarfieldOptions::default()
        };
        let field = Starfield::generate(&opts);
        assert_eq!(field.positions().len(), 150);
        for star in field.stars() {
            assert!(star.position.length() <= 10.0 + 1e-3);
        }
    }
}
