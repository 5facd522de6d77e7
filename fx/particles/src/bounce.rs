//! The basic effect: particles bouncing around the screen, beeping when they
//! hit an edge.

use rand::Rng;

use xfb::audio::play_event;
use xfb::input::cursor;
use xfb_fx_common::{decor, Demo, Frame};

use crate::{ConfigError, FieldConfig, ParticleField};

pub struct Bounce {
    field: ParticleField,
    show_region: bool,
    collisions: usize,
    dropped: usize,
}

impl Bounce {
    /// Sets up a field for a `width` x `height` screen, inset by the
    /// configured margin.
    pub fn new<R: Rng>(
        config: &FieldConfig,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let bounds = config.bounds(width, height);
        Ok(Bounce {
            field: ParticleField::new(config, bounds, rng)?,
            show_region: config.margin_percent > 0,
            collisions: 0,
            dropped: 0,
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Collisions seen since creation.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Collisions that found no free voice and went unheard.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Demo for Bounce {
    fn render_frame(&mut self, frame: Frame<'_>) {
        let Frame {
            mut surface,
            input,
            audio,
            ..
        } = frame;

        decor::center_marker(&mut surface, xfb::WHITE);
        decor::border(&mut surface, xfb::WHITE);
        if self.show_region {
            self.field.bounds().outline(&mut surface, xfb::BLUE);
        }
        if let Some(c) = cursor(&mut *input, 0) {
            decor::cursor_marker(&mut surface, c, xfb::YELLOW);
        }

        let dropped = &mut self.dropped;
        self.collisions += self.field.tick(&mut surface, |c| {
            if !play_event(&mut *audio, c.pitch) {
                *dropped += 1;
            }
        });
    }
}
