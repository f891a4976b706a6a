//! Live-tunable parameters owned by the interactive shell.
//!
//! The shell edits a [`Tuning`] from sliders, then either hands
//! [`Tuning::step_config`] to every step or pushes the values into the system
//! records with [`Tuning::apply`].

use crate::config::StepConfig;
use crate::error::ConfigResult;
use crate::float::Float;
use crate::system::MassSpringSystem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step length for one frame at `time_scale == 1`.
pub const BASE_FRAME_DT: f32 = 0.01;

pub const MASS_RANGE: (f32, f32) = (0.01, 1.0);
pub const STIFFNESS_RANGE: (f32, f32) = (1.0, 10.0);
pub const DAMPING_RANGE: (f32, f32) = (0.0, 0.05);
pub const GRAVITY_RANGE: (f32, f32) = (-10.0, 10.0);

/// Slider-backed parameters. Setters clamp into the slider ranges.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuning<F: Float> {
    mass: F,
    stiffness: F,
    damping: F,
    gravity: F,
    time_scale: F,
}

impl<F: Float> Tuning<F> {
    pub fn new() -> Self {
        Tuning {
            mass: F::from_f32(0.01),
            stiffness: F::from_f32(5.0),
            damping: F::from_f32(0.01),
            gravity: F::from_f32(-9.81),
            time_scale: F::one(),
        }
    }

    pub fn mass(&self) -> F { self.mass }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn damping(&self) -> F { self.damping }
    pub fn gravity(&self) -> F { self.gravity }
    pub fn time_scale(&self) -> F { self.time_scale }

    pub fn set_mass(&mut self, mass: F) {
        self.mass = clamp_to(mass, MASS_RANGE);
    }

    pub fn set_stiffness(&mut self, stiffness: F) {
        self.stiffness = clamp_to(stiffness, STIFFNESS_RANGE);
    }

    pub fn set_damping(&mut self, damping: F) {
        self.damping = clamp_to(damping, DAMPING_RANGE);
    }

    pub fn set_gravity(&mut self, gravity: F) {
        self.gravity = clamp_to(gravity, GRAVITY_RANGE);
    }

    /// Playback speed. Negative values clamp to zero (paused).
    pub fn set_time_scale(&mut self, time_scale: F) {
        self.time_scale = time_scale.max(F::zero());
    }

    /// Time step for one rendered frame.
    pub fn frame_dt(&self) -> F {
        self.time_scale * F::from_f32(BASE_FRAME_DT)
    }

    /// Step parameters with gravity and global spring coefficients.
    ///
    /// Fails when the values did not come through the clamping setters, e.g. a
    /// deserialized `Tuning` carrying a negative damping.
    pub fn step_config(&self) -> ConfigResult<StepConfig<F>> {
        let config = StepConfig::new()
            .with_gravity(self.gravity)
            .with_stiffness(self.stiffness)
            .with_damping(self.damping);
        config.validate()?;
        Ok(config)
    }

    /// Write mass and spring coefficients into every record of `system`.
    pub fn apply(&self, system: &mut MassSpringSystem<F>) -> ConfigResult<()> {
        system.set_mass(self.mass)?;
        system.set_spring_coefficients(self.stiffness, self.damping)
    }
}

impl<F: Float> Default for Tuning<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// NaN ends up at the lower bound.
fn clamp_to<F: Float>(value: F, (lo, hi): (f32, f32)) -> F {
    value.clamp(F::from_f32(lo), F::from_f32(hi))
}
