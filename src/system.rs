//! Chained velocity-Verlet integration of a mass-spring network.
//!
//! # Algorithm
//!
//! ```text
//! for each particle p, in index order:
//!   if p.z < floor: p.z = floor; v = -v * dt
//!   for each spring s of p, in insertion order:
//!     F      = spring(p.x, other.x) + m g - mu v
//!     v_half = v + (dt/2) F / m
//!     p.x    = p.x + dt v_half
//!     F'     = spring(p.x, other.x) + m g - mu v_half
//!     v      = v_half + (dt/2) F' / m
//! ```
//!
//! Each spring advances the particle by a full `dt` on its own, and `other.x` is
//! whatever that particle holds right now (already stepped if its index is lower).
//! Both properties shape the trajectories, so neither the particle order nor the
//! spring order may change.

use crate::config::{check_coefficient, StepConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::float::Float;
use crate::impulse::Impulse;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::spring::spring_force;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A finalized particle/spring graph. Create it with
/// [`SystemBuilder`](crate::builder::SystemBuilder).
///
/// Topology is fixed. Positions, velocities, masses and spring coefficients may
/// change between steps.
#[derive(Clone, Debug)]
pub struct MassSpringSystem<F: Float> {
    particles: AllocVec<Particle<F>>,
}

impl<F: Float> MassSpringSystem<F> {
    pub(crate) fn from_particles(particles: AllocVec<Particle<F>>) -> Self {
        MassSpringSystem { particles }
    }

    /// Advance every particle by `dt`.
    ///
    /// `dt` must be non-negative. No allocation happens here and nothing is
    /// clamped: a degenerate state shows up as NaN in the particle data.
    pub fn step<O: StepObserver>(&mut self, dt: F, config: &StepConfig<F>, observer: &mut O) {
        debug_assert!(dt >= F::zero(), "time step must be non-negative");
        debug_assert!(config.validate().is_ok(), "step config must be validated");

        let half_dt = dt * F::half();
        let gravity = Vec3::new(F::zero(), F::zero(), config.gravity);

        for i in 0..self.particles.len() {
            if self.particles[i].pinned {
                continue;
            }

            if self.particles[i].position.z < config.floor_z {
                let p = &mut self.particles[i];
                p.position.z = config.floor_z;
                p.velocity = (-p.velocity).scale(dt);
                observer.on_ground_contact(i);
            }

            for k in 0..self.particles[i].springs.len() {
                let spring = self.particles[i].springs[k];
                let other = self.particles[spring.other].position;
                let stiffness = config.stiffness_override.unwrap_or(spring.stiffness);
                let damping = config.damping_override.unwrap_or(spring.damping);

                let p = &mut self.particles[i];
                let weight = gravity.scale(p.mass);

                let force = spring_force(p.position, other, spring.rest_length, stiffness)
                    + weight
                    + p.velocity.scale(-damping);
                let v_half = p.velocity + force.scale(half_dt) / p.mass;
                p.position = p.position + v_half.scale(dt);

                let force = spring_force(p.position, other, spring.rest_length, stiffness)
                    + weight
                    + v_half.scale(-damping);
                p.velocity = v_half + force.scale(half_dt) / p.mass;

                observer.on_spring_integrated(i, k);
            }
        }

        observer.on_step_complete();
    }

    /// Add `delta_v` to every free particle.
    pub fn apply_impulse(&mut self, delta_v: Vec3<F>) {
        for p in self.particles.iter_mut() {
            p.apply_impulse(delta_v);
        }
    }

    /// Apply a directional kick of magnitude `strength` to every free particle.
    pub fn apply_kick(&mut self, kick: Impulse, strength: F) {
        self.apply_impulse(kick.velocity(strength));
    }

    /// Push one stiffness and damping into every spring record.
    pub fn set_spring_coefficients(&mut self, stiffness: F, damping: F) -> ConfigResult<()> {
        check_coefficient("stiffness", stiffness)?;
        check_coefficient("damping", damping)?;
        for s in self.particles.iter_mut().flat_map(|p| p.springs.iter_mut()) {
            s.stiffness = stiffness;
            s.damping = damping;
        }
        Ok(())
    }

    /// Give every free particle the same mass.
    pub fn set_mass(&mut self, mass: F) -> ConfigResult<()> {
        if !(mass > F::zero() && mass.is_finite()) {
            tracing::warn!(mass = mass.to_f64(), "rejected global mass");
            return Err(ConfigError::InvalidGlobalMass { value: mass.to_f64() });
        }
        for p in self.particles.iter_mut().filter(|p| !p.pinned) {
            p.mass = mass;
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }

    /// Mutable access to one particle's state. Springs stay read-only.
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }

    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    /// Total number of stored springs; a mirrored pair counts as two.
    pub fn spring_count(&self) -> usize {
        self.particles.iter().map(|p| p.springs.len()).sum()
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Endpoint pairs of every spring flagged visible, in storage order.
    pub fn visible_segments(&self) -> impl Iterator<Item = (Vec3<F>, Vec3<F>)> + '_ {
        self.particles.iter().flat_map(move |p| {
            p.springs
                .iter()
                .filter(|s| s.visible)
                .map(move |s| (p.position, self.particles[s.other].position))
        })
    }

    pub fn kinetic_energy(&self) -> F {
        self.particles.iter().fold(F::zero(), |acc, p| acc + p.kinetic_energy())
    }

    /// Elastic energy summed over stored springs, using their own stiffness.
    pub fn spring_energy(&self) -> F {
        let mut total = F::zero();
        for p in &self.particles {
            for s in &p.springs {
                total = total + s.energy(p.position, self.particles[s.other].position);
            }
        }
        total
    }

    /// Average particle position.
    pub fn centroid(&self) -> Vec3<F> {
        if self.particles.is_empty() {
            return Vec3::zero();
        }
        let mut sum = Vec3::zero();
        let mut n = F::zero();
        for p in &self.particles {
            sum += p.position;
            n = n + F::one();
        }
        sum / n
    }

    pub fn max_speed(&self) -> F {
        self.particles
            .iter()
            .fold(F::zero(), |acc, p| acc.max(p.velocity.length()))
    }

    /// Index of the first particle whose position or velocity is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.particles.iter().position(|p| !p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{SpringParams, SystemBuilder};
    use crate::observer::NoOpStepObserver;

    fn pendulum() -> MassSpringSystem<f64> {
        let mut b = SystemBuilder::new();
        let anchor = b.add_anchor(Vec3::zero());
        let bob = b.add_particle(Vec3::new(0.0, 0.0, 0.6), 1.0);
        b.add_spring(bob, anchor, SpringParams::new(5.0, 0.01).with_rest_length(0.4)).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn anchor_never_moves() {
        let mut sys = pendulum();
        let config = StepConfig::new();
        for _ in 0..100 {
            sys.step(0.01, &config, &mut NoOpStepObserver);
        }
        assert_eq!(sys.particle(0).position, Vec3::zero());
    }

    #[test]
    fn set_mass_rejects_zero() {
        let mut sys = pendulum();
        assert_eq!(sys.set_mass(0.0), Err(ConfigError::InvalidGlobalMass { value: 0.0 }));
        assert!(sys.set_mass(f64::NAN).is_err());
        sys.set_mass(0.5).unwrap();
        assert_eq!(sys.particle(1).mass(), 0.5);
    }

    #[test]
    fn set_spring_coefficients_rewrites_records() {
        let mut sys = pendulum();
        sys.set_spring_coefficients(8.0, 0.03).unwrap();
        let s = sys.particle(1).springs()[0];
        assert_eq!((s.stiffness, s.damping), (8.0, 0.03));
        assert!(sys.set_spring_coefficients(-1.0, 0.0).is_err());
    }

    #[test]
    fn centroid_of_pendulum() {
        let sys = pendulum();
        let c = sys.centroid();
        assert!((c.z - 0.3).abs() < 1e-12);
    }
}
