//! Particle field simulation (stateful).

use glowfield_core::{Point, SurfaceSize};
use rand::Rng;

/// Number of particles in every field.
pub const PARTICLE_COUNT: usize = 50;

/// Largest absolute velocity on either axis, in pixels per tick.
pub const MAX_SPEED: f32 = 0.25;

/// Radius range of a particle, in pixels.
pub const SIZE_RANGE: (f32, f32) = (1.0, 3.0);

/// Opacity range of a particle.
pub const OPACITY_RANGE: (f32, f32) = (0.1, 0.6);

/// A single drifting particle.
///
/// Only the position ever changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Point,
    velocity: Point,
    size: f32,
    opacity: f32,
}

impl Particle {
    /// Construct a particle from explicit state.
    pub fn new(position: Point, velocity: Point, size: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            opacity,
        }
    }

    /// Create a particle with randomized state inside `size`.
    fn random<R: Rng + ?Sized>(size: SurfaceSize, rng: &mut R) -> Self {
        let x = wrap_coord(rng.random::<f32>() * size.width_f32(), size.width_f32());
        let y = wrap_coord(rng.random::<f32>() * size.height_f32(), size.height_f32());
        Self {
            position: Point::new(x, y),
            velocity: Point::new(
                rng.random_range(-MAX_SPEED..=MAX_SPEED),
                rng.random_range(-MAX_SPEED..=MAX_SPEED),
            ),
            size: rng.random_range(SIZE_RANGE.0..=SIZE_RANGE.1),
            opacity: rng.random_range(OPACITY_RANGE.0..=OPACITY_RANGE.1),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Radius in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Move by one tick of velocity and wrap into `bounds`.
    fn step(&mut self, bounds: SurfaceSize) {
        self.position.x = wrap_coord(self.position.x + self.velocity.x, bounds.width_f32());
        self.position.y = wrap_coord(self.position.y + self.velocity.y, bounds.height_f32());
    }
}

/// Wrap a coordinate into `[0, extent)`.
///
/// A zero (or negative) extent parks the coordinate at the origin.
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// The full set of particles drawn behind the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create [`PARTICLE_COUNT`] particles spread uniformly over `size`.
    pub fn create<R: Rng + ?Sized>(size: SurfaceSize, rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(size, rng))
            .collect();
        Self { particles }
    }

    /// Build a field from explicit particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Advance every particle by one tick, wrapping against the current `size`.
    pub fn advance(&mut self, size: SurfaceSize) {
        for particle in &mut self.particles {
            particle.step(size);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
