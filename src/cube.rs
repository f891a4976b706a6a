//! Deformable cube: 8 particles, 12 edges and 4 long diagonals.

use crate::builder::{SpringParams, SystemBuilder};
use crate::error::ConfigResult;
use crate::float::Float;
use crate::system::MassSpringSystem;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of particles in a cube.
pub const CUBE_VERTICES: usize = 8;

/// Configuration for a cube.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeConfig<F: Float> {
    pub center: Vec3<F>,
    pub edge: F,
    pub particle_mass: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Default for CubeConfig<F> {
    fn default() -> Self {
        CubeConfig {
            center: Vec3::zero(),
            edge: F::half(),
            particle_mass: F::from_f32(0.01),
            stiffness: F::from_f32(5.0),
            damping: F::from_f32(0.01),
        }
    }
}

/// Build a cube.
///
/// Vertex `i` sits at `center + edge/2 * (±1, ±1, ±1)`, where bit 0 of `i`
/// selects +X, bit 1 +Y and bit 2 +Z. Each vertex stores, in this order, its
/// X, Y and Z edge springs and the diagonal to vertex `i ^ 7`. Every spring
/// therefore has a mirror on the other endpoint. Rest lengths are the initial
/// distances. Edges are drawn once, from their lower-index end; diagonals are
/// hidden.
pub fn cube<F: Float>(config: &CubeConfig<F>) -> ConfigResult<MassSpringSystem<F>> {
    let h = config.edge * F::half();
    let mut builder = SystemBuilder::with_capacity(CUBE_VERTICES);
    for i in 0..CUBE_VERTICES {
        let offset = Vec3::new(sign(i & 1, h), sign(i & 2, h), sign(i & 4, h));
        builder.add_particle(config.center + offset, config.particle_mass);
    }

    let params = SpringParams::new(config.stiffness, config.damping);
    for i in 0..CUBE_VERTICES {
        for bit in [1, 2, 4] {
            let j = i ^ bit;
            let edge = if i < j { params } else { params.hidden() };
            builder.add_spring(i, j, edge)?;
        }
        builder.add_spring(i, i ^ 7, params.hidden())?;
    }

    builder.build()
}

fn sign<F: Float>(bit: usize, h: F) -> F {
    if bit != 0 { h } else { -h }
}
