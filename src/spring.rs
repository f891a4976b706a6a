//! Damped Hookean springs: the per-endpoint force model and the spring record.

use crate::float::Float;
use crate::vec::Vec3;

/// Force exerted on the endpoint at `p_i` by a spring whose other end sits at `p_j`.
///
/// Hooke's law along the spring axis: `F = -K (L - L0) u`, where `u` points from
/// `p_j` to `p_i`. A stretched spring pulls `p_i` toward `p_j`, a compressed one
/// pushes it away, and the force vanishes at `L == L0`.
///
/// The direction is undefined when both endpoints coincide; in that case the
/// zero vector is returned instead of dividing by zero.
pub fn spring_force<F: Float>(p_i: Vec3<F>, p_j: Vec3<F>, rest_length: F, stiffness: F) -> Vec3<F> {
    let d = p_i - p_j;
    let length = d.length();
    if length == F::zero() {
        return Vec3::zero();
    }
    let u = d / length;
    u.scale(-stiffness * (length - rest_length))
}

/// Elastic potential energy `1/2 K (L - L0)^2` stored in a spring.
pub fn spring_energy<F: Float>(p_i: Vec3<F>, p_j: Vec3<F>, rest_length: F, stiffness: F) -> F {
    let stretch = p_i.distance(p_j) - rest_length;
    F::half() * stiffness * stretch * stretch
}

/// One spring stored on its first endpoint.
///
/// `other` indexes the second endpoint in the owning system's particle list.
/// Particles are never removed or reordered once the system is built, so the
/// index stays valid for the system's lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub other: usize,
    /// Stiffness `K`.
    pub stiffness: F,
    /// Velocity damping `mu`, applied to the owning particle only.
    pub damping: F,
    /// Rest length `L0`.
    pub rest_length: F,
    /// Whether this segment should be drawn. Has no effect on the physics.
    pub visible: bool,
}

impl<F: Float> Spring<F> {
    pub fn new(other: usize, stiffness: F, damping: F, rest_length: F) -> Self {
        Spring { other, stiffness, damping, rest_length, visible: true }
    }

    /// Spring force on an endpoint at `position` when the other end is at `other_position`.
    pub fn force(&self, position: Vec3<F>, other_position: Vec3<F>) -> Vec3<F> {
        spring_force(position, other_position, self.rest_length, self.stiffness)
    }

    /// Potential energy at the given endpoint positions.
    pub fn energy(&self, position: Vec3<F>, other_position: Vec3<F>) -> F {
        spring_energy(position, other_position, self.rest_length, self.stiffness)
    }
}
