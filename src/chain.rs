//! Hanging chain: an anchor followed by links joined by springs.

use crate::builder::{SpringParams, SystemBuilder};
use crate::error::ConfigResult;
use crate::float::Float;
use crate::system::MassSpringSystem;
use crate::vec::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a chain.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig<F: Float> {
    pub particle_mass: F,
    pub stiffness: F,
    pub damping: F,
    /// Rest length of every link. `None` keeps the initial spacing.
    pub rest_length: Option<F>,
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        ChainConfig {
            particle_mass: F::from_f32(0.01),
            stiffness: F::from_f32(5.0),
            damping: F::from_f32(0.01),
            rest_length: Some(F::from_f32(0.4)),
        }
    }
}

/// Chain through `points`; the first point is the anchor.
///
/// Link `i` stores a spring to link `i - 1` first and, unless it is the last
/// link, a spring to link `i + 1` second. The anchor stores none, so the
/// anchor-to-first-link spring acts only on the link. Only the backward
/// springs are visible, so every segment is drawn once.
pub fn chain_through<F: Float>(points: &[Vec3<F>], config: &ChainConfig<F>) -> ConfigResult<MassSpringSystem<F>> {
    let mut builder = SystemBuilder::with_capacity(points.len());
    for (i, &point) in points.iter().enumerate() {
        if i == 0 {
            builder.add_anchor(point);
        } else {
            builder.add_particle(point, config.particle_mass);
        }
    }

    let mut params = SpringParams::new(config.stiffness, config.damping);
    params.rest_length = config.rest_length;

    for i in 1..points.len() {
        builder.add_spring(i, i - 1, params)?;
        if i + 1 < points.len() {
            builder.add_spring(i, i + 1, params.hidden())?;
        }
    }

    builder.build()
}

/// Straight chain from `start` (anchored) to `end` with `segments` links.
pub fn chain<F: Float>(start: Vec3<F>, end: Vec3<F>, segments: usize, config: &ChainConfig<F>) -> ConfigResult<MassSpringSystem<F>> {
    let segments = segments.max(1);
    let mut points = alloc::vec::Vec::with_capacity(segments + 1);
    let n = F::from_f32(segments as f32);
    for i in 0..=segments {
        let t = F::from_f32(i as f32) / n;
        points.push(start + (end - start).scale(t));
    }
    chain_through(&points, config)
}

/// The two-link pendulum: anchor at the origin, links at y = 0.45 and y = 0.95.
pub fn two_link_pendulum<F: Float>(config: &ChainConfig<F>) -> ConfigResult<MassSpringSystem<F>> {
    let a = Vec3::zero();
    let b = Vec3::new(F::zero(), F::from_f32(0.45), F::zero());
    let c = b + Vec3::new(F::zero(), F::half(), F::zero());
    chain_through(&[a, b, c], config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pendulum_topology() {
        let sys: MassSpringSystem<f32> = two_link_pendulum(&ChainConfig::default()).unwrap();
        assert_eq!(sys.len(), 3);
        assert!(sys.particle(0).is_pinned());
        assert!(sys.particle(0).springs().is_empty());

        let b: alloc::vec::Vec<usize> = sys.particle(1).springs().iter().map(|s| s.other).collect();
        assert_eq!(b, [0, 2]);
        assert_eq!(sys.particle(2).springs()[0].other, 1);
        assert_eq!(sys.visible_segments().count(), 2);
    }

    #[test]
    fn straight_chain_counts() {
        let sys: MassSpringSystem<f64> = chain(
            Vec3::zero(),
            Vec3::new(0.0, 2.0, 0.0),
            4,
            &ChainConfig { rest_length: None, ..ChainConfig::default() },
        )
        .unwrap();
        assert_eq!(sys.len(), 5);
        // 4 backward springs + 3 forward springs
        assert_eq!(sys.spring_count(), 7);
        assert!((sys.particle(2).springs()[0].rest_length - 0.5).abs() < 1e-12);
    }
}
