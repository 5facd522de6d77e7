use smart_default::SmartDefault;

use crate::{Bounds, ConfigError, MAX_PARTICLES};

/// Settings for populating a `ParticleField`. Read once, at startup.
///
/// All ranges are inclusive. Speeds are magnitudes per frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct FieldConfig {
    #[default = 10]
    pub count: usize,

    #[default = 2]
    pub min_width: i32,
    #[default = 20]
    pub max_width: i32,
    #[default = 2]
    pub min_height: i32,
    #[default = 20]
    pub max_height: i32,

    #[default = 1]
    pub min_speed: i32,
    #[default = 10]
    pub max_speed: i32,

    /// Collision pitch, in Hz, for the largest particle.
    #[default = 24000]
    pub min_pitch: u32,
    /// Collision pitch, in Hz, for the smallest particle.
    #[default = 48000]
    pub max_pitch: u32,

    /// Margin kept clear around the screen edge, as a percentage of the
    /// screen's width and height.
    #[default = 0]
    pub margin_percent: u32,
}

impl FieldConfig {
    /// The bounding region for a `width` x `height` screen.
    pub fn bounds(&self, width: usize, height: usize) -> Bounds {
        Bounds::inset_percent(width, height, self.margin_percent)
    }

    /// Checks the settings against each other and against `bounds`.
    pub fn validate(&self, bounds: &Bounds) -> Result<(), ConfigError> {
        if self.count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                requested: self.count,
                capacity: MAX_PARTICLES,
            });
        }
        check_range("width", self.min_width, self.max_width, 1)?;
        check_range("height", self.min_height, self.max_height, 1)?;
        check_range("speed", self.min_speed, self.max_speed, 0)?;
        if self.min_pitch > self.max_pitch {
            return Err(ConfigError::PitchInverted {
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        if bounds.is_empty() {
            return Err(ConfigError::EmptyRegion(*bounds));
        }
        // Starting positions are drawn from `left..=right - size - 1`, which
        // needs the region to be strictly larger than the particle.
        if bounds.width() <= self.max_width || bounds.height() <= self.max_height
        {
            return Err(ConfigError::RegionTooSmall {
                bounds: *bounds,
                width: self.max_width,
                height: self.max_height,
            });
        }
        Ok(())
    }

    /// Collision pitch for a particle of the given size.
    ///
    /// Pitch falls linearly with area, from `max_pitch` for the smallest
    /// possible particle to `min_pitch` for the largest. The slope is computed
    /// in whole hertz per unit area *before* scaling, so it truncates; with
    /// the default settings the smallest particle comes out at 47760 Hz rather
    /// than 48000. If every particle has the same area, the slope is zero.
    ///
    /// Sizes outside the configured ranges are treated as the nearest end of
    /// the area range, so the result always lies between `min_pitch` and
    /// `max_pitch`.
    pub fn pitch_for(&self, width: i32, height: i32) -> u32 {
        let area_min = i64::from(self.min_width) * i64::from(self.min_height);
        let area_max = i64::from(self.max_width) * i64::from(self.max_height);
        let area = (i64::from(width) * i64::from(height))
            .min(area_max)
            .max(area_min);
        let span = i64::from(self.max_pitch.saturating_sub(self.min_pitch));
        let slope = if area_max > area_min {
            span / (area_max - area_min)
        } else {
            0
        };
        self.min_pitch + (slope * (area_max - area)) as u32
    }
}

fn check_range(
    what: &'static str,
    min: i32,
    max: i32,
    floor: i32,
) -> Result<(), ConfigError> {
    if min < floor || min > max {
        Err(ConfigError::EmptyRange { what, min, max })
    } else {
        Ok(())
    }
}
