//! The particle field simulator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::particle::{Particle, ParticleConfig};
use crate::frame::FrameScheduler;
use crate::layout::Viewport;
use crate::render::Surface;

/// Running totals for the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Frames simulated and drawn.
    pub frames: u64,
    /// Edge reflections (each axis counts once).
    pub reflections: u64,
    /// Times the particle set was rebuilt.
    pub populations: u64,
}

/// Owns a surface and the particles drifting across it.
pub struct ParticleField<S: Surface> {
    surface: S,
    particles: Vec<Particle>,
    config: ParticleConfig,
    rng: ChaCha8Rng,
    stats: FieldStats,
}

impl<S: Surface> ParticleField<S> {
    /// Creates an empty field. Call [`Self::init`] before the first frame.
    #[must_use]
    pub fn new(surface: S, config: ParticleConfig, seed: u64) -> Self {
        let capacity = config.max_particles;
        Self {
            surface,
            particles: Vec::with_capacity(capacity),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            stats: FieldStats::default(),
        }
    }

    /// Particle count for a surface of `area` px².
    ///
    /// `min(max_particles, floor(area / density))`; zero for degenerate areas.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn target_count(area: f64, config: &ParticleConfig) -> usize {
        let raw = (area / config.density).floor();
        if !raw.is_finite() || raw <= 0.0 {
            return 0;
        }
        (raw as usize).min(config.max_particles)
    }

    /// Sizes the surface to the viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.set_size(viewport.width, viewport.height);
    }

    /// Discards every particle and spawns a fresh set for the current size.
    pub fn populate(&mut self) {
        let width = self.surface.width();
        let height = self.surface.height();
        let count = Self::target_count(Viewport::new(width, height).area(), &self.config);

        self.particles.clear();
        let config = &self.config;
        let rng = &mut self.rng;
        self.particles
            .extend((0..count).map(|_| Particle::spawn(rng, width, height, config)));

        self.stats.populations += 1;
        tracing::debug!(count, width, height, "particle field populated");
    }

    /// Resizes to the viewport and repopulates. Used at startup and on every resize.
    pub fn init(&mut self, viewport: Viewport) {
        self.resize(viewport);
        self.populate();
    }

    /// Advances every particle one frame.
    pub fn step(&mut self) {
        let width = self.surface.width();
        let height = self.surface.height();

        let mut reflections = 0u64;
        for particle in &mut self.particles {
            reflections += u64::from(particle.step(width, height));
        }
        self.stats.reflections += reflections;
    }

    /// Clears the surface and draws every particle.
    pub fn draw(&mut self) {
        let bounds = self.surface.bounds();
        self.surface.clear(bounds);

        let color = self.config.color();
        for p in &self.particles {
            #[allow(clippy::cast_possible_truncation)]
            let fill = color.with_alpha(p.alpha as f32);
            self.surface.fill_circle(p.x, p.y, p.radius, fill);
        }
    }

    /// Runs one display frame, then requests the next one.
    ///
    /// Returns whether the scheduler accepted the request.
    pub fn frame(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        self.step();
        self.draw();
        self.stats.frames += 1;
        scheduler.request_tick()
    }

    /// Current particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true if there are no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The drawing surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Spawn configuration.
    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Running totals.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ManualScheduler;
    use crate::render::{CommandBuffer, DrawCommand};

    fn field() -> ParticleField<CommandBuffer> {
        ParticleField::new(CommandBuffer::new(), ParticleConfig::default(), 42)
    }

    #[test]
    fn test_target_count() {
        let config = ParticleConfig::default();
        assert_eq!(ParticleField::<CommandBuffer>::target_count(480_000.0, &config), 26);
        assert_eq!(ParticleField::<CommandBuffer>::target_count(17_999.0, &config), 0);
        assert_eq!(ParticleField::<CommandBuffer>::target_count(3840.0 * 2160.0, &config), 120);
        assert_eq!(ParticleField::<CommandBuffer>::target_count(-1.0, &config), 0);
        assert_eq!(ParticleField::<CommandBuffer>::target_count(f64::NAN, &config), 0);
    }

    #[test]
    fn test_init_800x600() {
        let mut field = field();
        field.init(Viewport::new(800.0, 600.0));

        assert_eq!(field.len(), 26);
        assert!((field.surface().width() - 800.0).abs() < f64::EPSILON);
        assert!((field.surface().height() - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_regenerates_whole_set() {
        let mut field = field();
        field.init(Viewport::new(800.0, 600.0));
        let before = field.particles().to_vec();

        field.init(Viewport::new(1200.0, 900.0));

        assert_eq!(field.len(), 60);
        assert_ne!(&before[..], &field.particles()[..26]);
        assert_eq!(field.stats().populations, 2);
    }

    #[test]
    fn test_draw_clears_then_fills() {
        let mut field = field();
        field.init(Viewport::new(800.0, 600.0));
        field.draw();

        let commands = field.surface_mut().take();
        assert_eq!(commands.len(), 1 + 26);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        for (cmd, p) in commands[1..].iter().zip(field.particles()) {
            let DrawCommand::Circle { x, y, radius, color } = cmd else {
                panic!("expected circle, got {cmd:?}");
            };
            assert!((x - p.x).abs() < f64::EPSILON);
            assert!((y - p.y).abs() < f64::EPSILON);
            assert!((radius - p.radius).abs() < f64::EPSILON);
            assert_eq!((color.r, color.g, color.b), (124, 92, 255));
        }
    }

    #[test]
    fn test_frame_requests_exactly_one_tick() {
        let mut field = field();
        let mut scheduler = ManualScheduler::new();
        field.init(Viewport::new(800.0, 600.0));

        assert!(field.frame(&mut scheduler));
        assert!(scheduler.has_pending());
        // A second frame before the first tick fired must not stack another.
        assert!(!field.frame(&mut scheduler));
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn test_same_seed_same_particles() {
        let mut a = field();
        let mut b = field();
        a.init(Viewport::new(1024.0, 768.0));
        b.init(Viewport::new(1024.0, 768.0));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_empty_field_still_schedules() {
        let mut field = field();
        let mut scheduler = ManualScheduler::new();
        field.init(Viewport::new(100.0, 100.0));

        assert!(field.is_empty());
        assert!(field.frame(&mut scheduler));
        assert_eq!(field.surface().circle_count(), 0);
    }
}
