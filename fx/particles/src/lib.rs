//! Bouncing particles.
//!
//! A `ParticleField` owns a fixed set of rectangles that drift at constant
//! velocity inside a `Bounds` region. When one crosses an edge it is pushed
//! back onto the edge, its velocity along that axis flips, and the field
//! reports a `Collision` carrying the particle's pitch, which the demos turn
//! into a sound effect. Fields can also carry `Token`s: rectangles positioned
//! directly from input rather than by velocity.
//!
//! The two demo effects built on this live in `bounce` and `duel`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bounce;
mod bounds;
mod config;
pub mod duel;
mod error;
mod field;
mod particle;
mod token;

pub use bounds::Bounds;
pub use config::FieldConfig;
pub use error::ConfigError;
pub use field::{Collision, ParticleField, MAX_PARTICLES, MAX_TOKENS};
pub use particle::{Axis, Particle};
pub use token::Token;
