//! Point masses carrying their own outgoing springs.

use crate::float::Float;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A point mass with explicit velocity.
///
/// The particle is the first endpoint of every spring in `springs`. Only this
/// particle is integrated when those springs are processed; the other endpoint
/// reacts only if it stores a spring back.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    pub(crate) mass: F,
    pub(crate) springs: AllocVec<Spring<F>>,
    pub(crate) pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        Particle {
            position,
            velocity: Vec3::zero(),
            mass,
            springs: AllocVec::new(),
            pinned: false,
        }
    }

    /// A fixed anchor. Anchors never move: no gravity, springs, ground contact or impulses.
    pub fn pinned(position: Vec3<F>) -> Self {
        Particle {
            position,
            velocity: Vec3::zero(),
            mass: F::one(),
            springs: AllocVec::new(),
            pinned: true,
        }
    }

    pub fn mass(&self) -> F { self.mass }
    pub fn is_pinned(&self) -> bool { self.pinned }

    /// Outgoing springs, in integration order.
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }

    /// Add a velocity change. Ignored for anchors.
    pub fn apply_impulse(&mut self, delta_v: Vec3<F>) {
        if !self.pinned {
            self.velocity += delta_v;
        }
    }

    /// `1/2 m |v|^2`; zero for anchors.
    pub fn kinetic_energy(&self) -> F {
        if self.pinned {
            return F::zero();
        }
        F::half() * self.mass * self.velocity.length_sq()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ignores_impulses() {
        let mut p: Particle<f32> = Particle::pinned(Vec3::zero());
        p.apply_impulse(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p.velocity, Vec3::zero());
        assert_eq!(p.kinetic_energy(), 0.0);
    }

    #[test]
    fn kinetic_energy_half_m_v_squared() {
        let mut p: Particle<f64> = Particle::new(Vec3::zero(), 2.0);
        p.apply_impulse(Vec3::new(0.0, 3.0, 0.0));
        assert!((p.kinetic_energy() - 9.0).abs() < 1e-12);
    }
}
