use core::fmt;

use crate::Bounds;

/// Problems with a field configuration, found before the first tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// More particles were requested than the field can hold.
    TooManyParticles { requested: usize, capacity: usize },
    /// More tokens were added than the field can hold.
    TooManyTokens { capacity: usize },
    /// A `min..=max` setting has `min > max`, or allows a nonsensical value
    /// (a particle of size zero, a negative speed).
    EmptyRange {
        what: &'static str,
        min: i32,
        max: i32,
    },
    PitchInverted { min: u32, max: u32 },
    /// The bounding region has no area.
    EmptyRegion(Bounds),
    /// The bounding region can't hold a `width` x `height` rectangle with
    /// room to spare.
    RegionTooSmall {
        bounds: Bounds,
        width: i32,
        height: i32,
    },
    /// A particle or token placed by hand has no area, or doesn't lie
    /// entirely inside the bounding region.
    Misplaced {
        what: &'static str,
        index: usize,
        bounds: Bounds,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::TooManyParticles {
                requested,
                capacity,
            } => write!(
                f,
                "{} particles requested, field holds at most {}",
                requested, capacity
            ),
            ConfigError::TooManyTokens { capacity } => {
                write!(f, "field holds at most {} tokens", capacity)
            }
            ConfigError::EmptyRange { what, min, max } => {
                write!(f, "{} range {}..={} is empty or invalid", what, min, max)
            }
            ConfigError::PitchInverted { min, max } => {
                write!(f, "pitch range {}..={} is inverted", min, max)
            }
            ConfigError::EmptyRegion(b) => write!(
                f,
                "bounding region ({}, {})-({}, {}) has no area",
                b.left, b.top, b.right, b.bottom
            ),
            ConfigError::RegionTooSmall {
                bounds,
                width,
                height,
            } => write!(
                f,
                "bounding region {}x{} can't hold a {}x{} rectangle",
                bounds.width(),
                bounds.height(),
                width,
                height
            ),
            ConfigError::Misplaced {
                what,
                index,
                bounds,
            } => write!(
                f,
                "{} {} is empty or outside ({}, {})-({}, {})",
                what, index, bounds.left, bounds.top, bounds.right, bounds.bottom
            ),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for ConfigError {}
