//! Particle entity and spawn configuration.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::style::Color;

/// Configuration for particle spawning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Surface area (px²) per particle.
    pub density: f64,
    /// Upper bound on the particle count, whatever the surface size.
    pub max_particles: usize,
    /// Largest absolute velocity per axis (px/frame).
    pub max_speed: f64,
    /// Smallest radius.
    pub radius_min: f64,
    /// Largest radius (exclusive).
    pub radius_max: f64,
    /// Smallest alpha.
    pub alpha_min: f64,
    /// Largest alpha (exclusive).
    pub alpha_max: f64,
    /// Fill color channels (r, g, b).
    pub hue: [u8; 3],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            density: 18_000.0,
            max_particles: 120,
            max_speed: 0.125,
            radius_min: 0.4,
            radius_max: 2.0,
            alpha_min: 0.15,
            alpha_max: 0.55,
            hue: [124, 92, 255],
        }
    }
}

impl ParticleConfig {
    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(FolioError::InvalidConfig(format!(
                "particles.density must be positive, got {}",
                self.density
            )));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(FolioError::InvalidConfig(format!(
                "particles.max_speed must be non-negative, got {}",
                self.max_speed
            )));
        }
        check_range("radius", self.radius_min, self.radius_max, f64::INFINITY)?;
        check_range("alpha", self.alpha_min, self.alpha_max, 1.0)
    }

    /// Returns the fill color at full alpha.
    #[must_use]
    pub const fn color(&self) -> Color {
        Color::rgb(self.hue[0], self.hue[1], self.hue[2])
    }
}

fn check_range(name: &str, min: f64, max: f64, ceiling: f64) -> FolioResult<()> {
    if min.is_finite() && max.is_finite() && 0.0 <= min && min <= max && max <= ceiling {
        Ok(())
    } else {
        Err(FolioError::InvalidConfig(format!(
            "particles.{name} range [{min}, {max}) is not within [0, {ceiling}]"
        )))
    }
}

/// A single simulated dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// X velocity (px/frame).
    pub vx: f64,
    /// Y velocity (px/frame).
    pub vy: f64,
    /// Radius, fixed at spawn.
    pub radius: f64,
    /// Opacity, fixed at spawn.
    pub alpha: f64,
}

impl Particle {
    /// Spawns a particle uniformly over a `width` × `height` surface.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64, config: &ParticleConfig) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            vx: (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed,
            vy: (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed,
            radius: lerp(config.radius_min, config.radius_max, rng.gen()),
            alpha: lerp(config.alpha_min, config.alpha_max, rng.gen()),
        }
    }

    /// Advances one frame inside `[0, width] × [0, height]`.
    ///
    /// Returns how many axes reflected (0, 1 or 2).
    pub fn step(&mut self, width: f64, height: f64) -> u32 {
        self.x += self.vx;
        self.y += self.vy;

        u32::from(reflect(&mut self.x, &mut self.vx, width))
            + u32::from(reflect(&mut self.y, &mut self.vy, height))
    }
}

/// Mirrors an overshoot back inside `[0, extent]` and flips the velocity.
fn reflect(pos: &mut f64, vel: &mut f64, extent: f64) -> bool {
    if *pos < 0.0 {
        *pos = -*pos;
    } else if *pos > extent {
        *pos = 2.0 * extent - *pos;
    } else {
        return false;
    }
    *vel = -*vel;
    // Only reachable when one step is longer than the extent itself.
    *pos = pos.clamp(0.0, extent.max(0.0));
    true
}

#[inline]
fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_within_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = ParticleConfig::default();

        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0, &config);
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.125 && p.vy.abs() <= 0.125);
            assert!((0.4..2.0).contains(&p.radius));
            assert!((0.15..0.55).contains(&p.alpha));
        }
    }

    #[test]
    fn test_reflects_off_left_edge() {
        let mut p = Particle {
            x: 0.05,
            y: 10.0,
            vx: -0.1,
            vy: 0.0,
            radius: 1.0,
            alpha: 0.5,
        };

        assert_eq!(p.step(100.0, 100.0), 1);
        assert!((p.x - 0.05).abs() < 1e-12);
        assert!(p.vx > 0.0);
    }

    #[test]
    fn test_reflects_off_bottom_right_corner() {
        let mut p = Particle {
            x: 99.95,
            y: 49.95,
            vx: 0.1,
            vy: 0.1,
            radius: 1.0,
            alpha: 0.5,
        };

        assert_eq!(p.step(100.0, 50.0), 2);
        assert!(p.x <= 100.0 && p.y <= 50.0);
        assert!(p.vx < 0.0 && p.vy < 0.0);
    }

    #[test]
    fn test_zero_extent_pins_to_edge() {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.1,
            vy: -0.1,
            radius: 1.0,
            alpha: 0.5,
        };
        p.step(0.0, 0.0);
        assert!(p.x.abs() < f64::EPSILON && p.y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = ParticleConfig {
            alpha_min: 0.9,
            alpha_max: 0.2,
            ..ParticleConfig::default()
        };
        assert!(matches!(config.validate(), Err(FolioError::InvalidConfig(_))));
        assert!(ParticleConfig::default().validate().is_ok());
    }
}
