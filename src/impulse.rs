//! Directional velocity kicks triggered by the user.

use crate::float::Float;
use crate::vec::Vec3;

/// An axis-aligned kick applied to every free particle before a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Impulse {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Impulse {
    pub const ALL: [Impulse; 6] = [
        Impulse::PosX,
        Impulse::NegX,
        Impulse::PosY,
        Impulse::NegY,
        Impulse::PosZ,
        Impulse::NegZ,
    ];

    /// Unit direction of the kick.
    pub fn direction<F: Float>(self) -> Vec3<F> {
        match self {
            Impulse::PosX => Vec3::unit_x(),
            Impulse::NegX => -Vec3::unit_x(),
            Impulse::PosY => Vec3::unit_y(),
            Impulse::NegY => -Vec3::unit_y(),
            Impulse::PosZ => Vec3::unit_z(),
            Impulse::NegZ => -Vec3::unit_z(),
        }
    }

    /// Velocity change of magnitude `strength` along this direction.
    pub fn velocity<F: Float>(self, strength: F) -> Vec3<F> {
        self.direction().scale(strength)
    }
}
