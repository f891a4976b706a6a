//! Damped mass-spring networks for deformable bodies.
//!
//! `sprung` animates point masses joined by damped springs under gravity,
//! with a ground plane. It is meant to sit behind an interactive shell that
//! supplies frame times and impulses and draws the resulting positions.
//!
//! # Features
//!
//! - **Chained velocity-Verlet**: each spring of a particle advances it in turn,
//!   in a fixed order, so trajectories are reproducible bit for bit
//! - **Index-based graph**: springs refer to particles by index into a frozen arena
//! - **Validated construction**: bad masses, coefficients or coincident endpoints
//!   are rejected before the first step
//! - **Scenes**: hanging chains and a diagonally braced cube
//! - **Observable**: monitor contacts and progress via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use sprung::{cube, CubeConfig, NoOpStepObserver, StepConfig};
//!
//! let mut body = cube(&CubeConfig::<f32>::default()).unwrap();
//! let config = StepConfig::new();
//! for _ in 0..100 {
//!     body.step(0.01, &config, &mut NoOpStepObserver);
//! }
//! assert!(body.first_non_finite().is_none());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod spring;
pub mod particle;
pub mod builder;
pub mod system;
pub mod chain;
pub mod cube;
pub mod impulse;
pub mod observer;
pub mod config;
pub mod tuning;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use spring::{spring_force, spring_energy, Spring};
pub use particle::Particle;
pub use builder::{SpringParams, SystemBuilder};
pub use system::MassSpringSystem;
pub use chain::{chain, chain_through, two_link_pendulum, ChainConfig};
pub use cube::{cube, CubeConfig, CUBE_VERTICES};
pub use impulse::Impulse;
pub use config::StepConfig;
pub use tuning::Tuning;
pub use observer::{StepObserver, NoOpStepObserver, TracingObserver};
pub use error::{ConfigError, ConfigResult};
