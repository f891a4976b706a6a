//! Configuration errors raised while building or retuning a system.

use thiserror::Error;

/// Result alias for fallible construction and tuning operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A particle or spring was configured with values the integrator cannot handle.
///
/// All of these are detected before the animation loop runs; `step` itself has
/// no error path and lets NaN propagate if state degrades anyway.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Mass must be positive and finite.
    #[error("particle {index}: mass must be positive and finite, got {mass}")]
    InvalidMass {
        /// Offending particle.
        index: usize,
        /// Supplied mass.
        mass: f64,
    },

    /// Initial position or velocity contains NaN or infinity.
    #[error("particle {index}: {field} is not finite")]
    NonFiniteState {
        /// Offending particle.
        index: usize,
        /// `"position"` or `"velocity"`.
        field: &'static str,
    },

    /// A spring coefficient is NaN, infinite or negative.
    #[error("spring {particle}->{other}: {name} must be finite and non-negative, got {value}")]
    InvalidCoefficient {
        /// Particle owning the spring.
        particle: usize,
        /// Second endpoint.
        other: usize,
        /// `"stiffness"` or `"damping"`.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },

    /// Rest length must be positive and finite.
    #[error("spring {particle}->{other}: rest length must be positive and finite, got {rest_length}")]
    InvalidRestLength {
        /// Particle owning the spring.
        particle: usize,
        /// Second endpoint.
        other: usize,
        /// Supplied rest length.
        rest_length: f64,
    },

    /// Both spring endpoints sit at the same point, so the spring direction is undefined.
    #[error("spring {particle}->{other}: endpoints coincide")]
    CoincidentEndpoints {
        /// Particle owning the spring.
        particle: usize,
        /// Second endpoint.
        other: usize,
    },

    /// A spring may not connect a particle to itself.
    #[error("particle {index}: spring to itself")]
    SelfSpring {
        /// Offending particle.
        index: usize,
    },

    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of particles.
        count: usize,
    },

    /// A global coefficient pushed between steps was rejected.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidGlobal {
        /// `"stiffness"` or `"damping"`.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },

    /// A global mass pushed between steps was rejected.
    #[error("mass must be positive and finite, got {value}")]
    InvalidGlobalMass {
        /// Supplied mass.
        value: f64,
    },

    /// Gravity or floor height is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteGlobal {
        /// `"gravity"` or `"floor_z"`.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },
}
