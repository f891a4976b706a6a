//! Per-step simulation parameters.

use crate::error::{ConfigError, ConfigResult};
use crate::float::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default gravity along Z, in m/s^2.
pub const DEFAULT_GRAVITY: f32 = -9.81;
/// Default height of the ground plane.
pub const DEFAULT_FLOOR_Z: f32 = -1.5;

/// Parameters read by [`MassSpringSystem::step`](crate::MassSpringSystem::step).
///
/// This is an immutable value: change it between steps, never during one.
///
/// # Builder Pattern
/// ```
/// use sprung::config::StepConfig;
///
/// let config: StepConfig<f32> = StepConfig::new()
///     .with_gravity(-9.81)
///     .with_floor(-1.5)
///     .with_stiffness(5.0)
///     .with_damping(0.01);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepConfig<F: Float> {
    /// Gravity along Z (`gy`). Gravity is always vertical. Default: -9.81.
    pub gravity: F,
    /// Height of the ground plane. Default: -1.5.
    pub floor_z: F,
    /// When set, replaces every spring's own stiffness.
    pub stiffness_override: Option<F>,
    /// When set, replaces every spring's own damping.
    pub damping_override: Option<F>,
}

impl<F: Float> StepConfig<F> {
    pub fn new() -> Self {
        StepConfig {
            gravity: F::from_f32(DEFAULT_GRAVITY),
            floor_z: F::from_f32(DEFAULT_FLOOR_Z),
            stiffness_override: None,
            damping_override: None,
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_floor(mut self, floor_z: F) -> Self {
        self.floor_z = floor_z;
        self
    }

    /// Use one global stiffness for every spring.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness_override = Some(stiffness);
        self
    }

    /// Use one global damping coefficient for every spring.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping_override = Some(damping);
        self
    }

    /// Check that gravity and floor are finite and that any override is a finite,
    /// non-negative coefficient. `step` assumes this holds.
    pub fn validate(&self) -> ConfigResult<()> {
        check_finite("gravity", self.gravity)?;
        check_finite("floor_z", self.floor_z)?;
        if let Some(stiffness) = self.stiffness_override {
            check_coefficient("stiffness", stiffness)?;
        }
        if let Some(damping) = self.damping_override {
            check_coefficient("damping", damping)?;
        }
        Ok(())
    }
}

impl<F: Float> Default for StepConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_coefficient<F: Float>(name: &'static str, value: F) -> ConfigResult<()> {
    if value >= F::zero() && value.is_finite() {
        Ok(())
    } else {
        tracing::warn!(name, value = value.to_f64(), "rejected global coefficient");
        Err(ConfigError::InvalidGlobal { name, value: value.to_f64() })
    }
}

fn check_finite<F: Float>(name: &'static str, value: F) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        tracing::warn!(name, value = value.to_f64(), "rejected step parameter");
        Err(ConfigError::NonFiniteGlobal { name, value: value.to_f64() })
    }
}
