//! Two players, each steering a token up and down one side of the screen,
//! with particles bouncing around between them.

use rand::Rng;

use gfx::Surface;
use xfb::audio::play_event;
use xfb::input::{cursor, Channel};
use xfb_fx_common::{decor, Demo, Frame};

use crate::{ConfigError, FieldConfig, ParticleField, Token};

pub const TOKEN_WIDTH: i32 = 8;
pub const TOKEN_HEIGHT: i32 = 48;
/// Distance between each token and its side of the region.
pub const TOKEN_GAP: i32 = 16;

/// Length of each dash in the center net, and of the gaps between them.
const DASH: i32 = 8;

const PLAYERS: [(Channel, u32); 2] = [(0, xfb::RED), (1, xfb::GREEN)];

pub struct Duel {
    field: ParticleField,
    collisions: usize,
    dropped: usize,
}

impl Duel {
    pub fn new<R: Rng>(
        config: &FieldConfig,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let bounds = config.bounds(width, height);
        if bounds.width() < 2 * (TOKEN_GAP + TOKEN_WIDTH) {
            return Err(ConfigError::RegionTooSmall {
                bounds,
                width: 2 * (TOKEN_GAP + TOKEN_WIDTH),
                height: TOKEN_HEIGHT,
            });
        }

        let mut field = ParticleField::new(config, bounds, rng)?;
        let pos_y = bounds.top + (bounds.height() - TOKEN_HEIGHT) / 2;
        let columns = [
            bounds.left + TOKEN_GAP,
            bounds.right - TOKEN_GAP - TOKEN_WIDTH,
        ];
        for (&pos_x, &(_, color)) in columns.iter().zip(PLAYERS.iter()) {
            field.add_token(Token {
                pos_x,
                pos_y,
                size_x: TOKEN_WIDTH,
                size_y: TOKEN_HEIGHT,
                color,
            })?;
        }

        Ok(Duel {
            field,
            collisions: 0,
            dropped: 0,
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Collisions that found no free voice and went unheard.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Draws a dashed vertical line down the middle of the screen.
fn net<B>(s: &mut Surface<B>)
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    let x = s.width() as i32 / 2;
    let bottom = s.height() as i32 - 2;
    let mut y = 2;
    while y <= bottom {
        s.draw_line(x, y, x, (y + DASH - 1).min(bottom), xfb::WHITE);
        y += 2 * DASH;
    }
}

impl Demo for Duel {
    fn render_frame(&mut self, frame: Frame<'_>) {
        let Frame {
            mut surface,
            input,
            audio,
            ..
        } = frame;

        decor::border(&mut surface, xfb::WHITE);
        net(&mut surface);

        for (token, &(channel, color)) in PLAYERS.iter().enumerate() {
            // A missing reading leaves the token where it was.
            if let Some(c) = cursor(&mut *input, channel) {
                self.field.steer(token, c.y);
                decor::cursor_marker(&mut surface, c, color);
            }
        }

        let dropped = &mut self.dropped;
        self.collisions += self.field.tick(&mut surface, |c| {
            if !play_event(&mut *audio, c.pitch) {
                *dropped += 1;
            }
        });
    }
}
