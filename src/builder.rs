//! Construction of the particle/spring graph.
//!
//! Topology only exists while a [`SystemBuilder`] is alive. [`SystemBuilder::build`]
//! validates everything and consumes the builder, so no particle can be added
//! or removed once springs refer to each other by index.

use crate::error::{ConfigError, ConfigResult};
use crate::float::Float;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::system::MassSpringSystem;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Coefficients for a spring about to be added.
///
/// ```
/// use sprung::builder::SpringParams;
///
/// let edge: SpringParams<f32> = SpringParams::new(5.0, 0.01);
/// let diagonal = edge.hidden().with_rest_length(0.9);
/// assert!(!diagonal.visible);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringParams<F: Float> {
    pub stiffness: F,
    pub damping: F,
    /// Explicit rest length. `None` uses the endpoint distance at insertion time.
    pub rest_length: Option<F>,
    pub visible: bool,
}

impl<F: Float> SpringParams<F> {
    pub fn new(stiffness: F, damping: F) -> Self {
        SpringParams { stiffness, damping, rest_length: None, visible: true }
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = Some(rest_length);
        self
    }

    /// Do not draw this spring.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Incrementally assembles particles and springs.
#[derive(Clone, Debug, Default)]
pub struct SystemBuilder<F: Float> {
    particles: AllocVec<Particle<F>>,
}

impl<F: Float> SystemBuilder<F> {
    pub fn new() -> Self {
        SystemBuilder { particles: AllocVec::new() }
    }

    pub fn with_capacity(particles: usize) -> Self {
        SystemBuilder { particles: AllocVec::with_capacity(particles) }
    }

    /// Add a free particle at rest. Returns its index.
    pub fn add_particle(&mut self, position: Vec3<F>, mass: F) -> usize {
        self.push(Particle::new(position, mass))
    }

    pub fn add_particle_with_velocity(&mut self, position: Vec3<F>, velocity: Vec3<F>, mass: F) -> usize {
        let mut particle = Particle::new(position, mass);
        particle.velocity = velocity;
        self.push(particle)
    }

    /// Add a fixed anchor. Returns its index.
    pub fn add_anchor(&mut self, position: Vec3<F>) -> usize {
        self.push(Particle::pinned(position))
    }

    fn push(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Add a one-directional spring stored on `from`. Only `from` feels it.
    ///
    /// Springs are integrated in insertion order, which affects trajectories.
    pub fn add_spring(&mut self, from: usize, to: usize, params: SpringParams<F>) -> ConfigResult<()> {
        let count = self.particles.len();
        for index in [from, to] {
            if index >= count {
                tracing::warn!(index, count, "spring endpoint out of bounds");
                return Err(ConfigError::ParticleOutOfBounds { index, count });
            }
        }
        let rest_length = match params.rest_length {
            Some(l0) => l0,
            None => self.particles[from].position.distance(self.particles[to].position),
        };
        let mut spring = Spring::new(to, params.stiffness, params.damping, rest_length);
        spring.visible = params.visible;
        self.particles[from].springs.push(spring);
        Ok(())
    }

    /// Add a mirrored pair: `a -> b` then `b -> a`.
    pub fn connect(&mut self, a: usize, b: usize, params: SpringParams<F>) -> ConfigResult<()> {
        self.add_spring(a, b, params)?;
        self.add_spring(b, a, params)
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Validate and freeze the graph.
    pub fn build(self) -> ConfigResult<MassSpringSystem<F>> {
        if let Err(err) = validate(&self.particles) {
            tracing::warn!(%err, "rejected mass-spring configuration");
            return Err(err);
        }
        let springs: usize = self.particles.iter().map(|p| p.springs.len()).sum();
        tracing::debug!(particles = self.particles.len(), springs, "mass-spring system finalized");
        Ok(MassSpringSystem::from_particles(self.particles))
    }
}

fn validate<F: Float>(particles: &[Particle<F>]) -> ConfigResult<()> {
    for (index, p) in particles.iter().enumerate() {
        if !p.pinned && !(p.mass > F::zero() && p.mass.is_finite()) {
            return Err(ConfigError::InvalidMass { index, mass: p.mass.to_f64() });
        }
        if !p.position.is_finite() {
            return Err(ConfigError::NonFiniteState { index, field: "position" });
        }
        if !p.velocity.is_finite() {
            return Err(ConfigError::NonFiniteState { index, field: "velocity" });
        }
        for s in &p.springs {
            validate_spring(index, s, particles)?;
        }
    }
    Ok(())
}

fn validate_spring<F: Float>(particle: usize, s: &Spring<F>, particles: &[Particle<F>]) -> ConfigResult<()> {
    let other = s.other;
    if other == particle {
        return Err(ConfigError::SelfSpring { index: particle });
    }
    for (name, value) in [("stiffness", s.stiffness), ("damping", s.damping)] {
        if !(value >= F::zero() && value.is_finite()) {
            return Err(ConfigError::InvalidCoefficient { particle, other, name, value: value.to_f64() });
        }
    }
    if !(s.rest_length > F::zero() && s.rest_length.is_finite()) {
        return Err(ConfigError::InvalidRestLength { particle, other, rest_length: s.rest_length.to_f64() });
    }
    if particles[particle].position == particles[other].position {
        return Err(ConfigError::CoincidentEndpoints { particle, other });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_length_defaults_to_distance() {
        let mut b: SystemBuilder<f64> = SystemBuilder::new();
        let a = b.add_anchor(Vec3::zero());
        let p = b.add_particle(Vec3::new(0.0, 0.0, 0.6), 1.0);
        b.add_spring(p, a, SpringParams::new(5.0, 0.0)).unwrap();
        let sys = b.build().unwrap();
        assert!((sys.particle(p).springs()[0].rest_length - 0.6).abs() < 1e-12);
    }

    #[test]
    fn connect_mirrors_the_spring() {
        let mut b: SystemBuilder<f32> = SystemBuilder::new();
        let p0 = b.add_particle(Vec3::zero(), 1.0);
        let p1 = b.add_particle(Vec3::unit_x(), 1.0);
        b.connect(p0, p1, SpringParams::new(1.0, 0.0).hidden()).unwrap();
        let sys = b.build().unwrap();
        assert_eq!(sys.particle(p0).springs()[0].other, p1);
        assert_eq!(sys.particle(p1).springs()[0].other, p0);
        assert!(!sys.particle(p1).springs()[0].visible);
    }

    #[test]
    fn out_of_bounds_endpoint_rejected_immediately() {
        let mut b: SystemBuilder<f32> = SystemBuilder::new();
        b.add_particle(Vec3::zero(), 1.0);
        let err = b.add_spring(0, 4, SpringParams::new(1.0, 0.0)).unwrap_err();
        assert_eq!(err, ConfigError::ParticleOutOfBounds { index: 4, count: 1 });
    }
}
