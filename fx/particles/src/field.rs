use arrayvec::ArrayVec;
use rand::Rng;

use gfx::{Color, Surface};

use crate::{Axis, Bounds, ConfigError, FieldConfig, Particle, Token};

/// Most particles a field can hold.
pub const MAX_PARTICLES: usize = 64;
/// Most tokens a field can hold.
pub const MAX_TOKENS: usize = 2;

/// Initial directions are chosen by drawing a random number and flipping the
/// sign if it's nonzero modulo this. Since anything modulo 1 is zero, every
/// particle starts out moving right and down. The draw still happens, so
/// changing this won't disturb the rest of the random sequence.
const SIGN_FLIP_MODULUS: u32 = 1;

/// Emitted when a particle bounces off an edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Collision {
    /// Index of the particle in `ParticleField::particles`.
    pub particle: usize,
    pub axis: Axis,
    pub pitch: u32,
}

/// A fixed population of particles, plus optional tokens, confined to a
/// region.
#[derive(Debug)]
pub struct ParticleField {
    particles: ArrayVec<[Particle; MAX_PARTICLES]>,
    tokens: ArrayVec<[Token; MAX_TOKENS]>,
    bounds: Bounds,
    color: Color,
}

impl ParticleField {
    /// Populates a field according to `config`.
    ///
    /// Each particle gets a random size, a random starting position with the
    /// whole particle inside `bounds`, and a random speed along each axis.
    pub fn new<R: Rng>(
        config: &FieldConfig,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate(&bounds)?;

        let mut particles = ArrayVec::new();
        for i in 0..config.count {
            let size_x = rnd(rng, config.min_width, config.max_width);
            let size_y = rnd(rng, config.min_height, config.max_height);
            let pos_x = rnd(rng, bounds.left, bounds.right - size_x - 1);
            let pos_y = rnd(rng, bounds.top, bounds.bottom - size_y - 1);
            let mut dx = rnd(rng, config.min_speed, config.max_speed);
            let mut dy = rnd(rng, config.min_speed, config.max_speed);

            if rng.gen::<u32>() % SIGN_FLIP_MODULUS != 0 {
                dx = -dx;
            }
            if rng.gen::<u32>() % SIGN_FLIP_MODULUS != 0 {
                dy = -dy;
            }

            let p = Particle {
                pos_x,
                pos_y,
                size_x,
                size_y,
                dx,
                dy,
                pitch: config.pitch_for(size_x, size_y),
            };
            log::debug!("particle {}: {:?}", i, p);
            particles.push(p);
        }

        log::info!(
            "{} particles in ({}, {})-({}, {})",
            particles.len(),
            bounds.left,
            bounds.top,
            bounds.right,
            bounds.bottom
        );

        Ok(ParticleField {
            particles,
            tokens: ArrayVec::new(),
            bounds,
            color: xfb::WHITE,
        })
    }

    /// Builds a field from particles placed by hand. Every particle must start
    /// out entirely inside `bounds`.
    pub fn from_particles(
        particles: &[Particle],
        bounds: Bounds,
    ) -> Result<Self, ConfigError> {
        if particles.len() > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                requested: particles.len(),
                capacity: MAX_PARTICLES,
            });
        }
        if bounds.is_empty() {
            return Err(ConfigError::EmptyRegion(bounds));
        }
        for (index, p) in particles.iter().enumerate() {
            if !bounds.holds(p.pos_x, p.pos_y, p.size_x, p.size_y) {
                return Err(ConfigError::Misplaced {
                    what: "particle",
                    index,
                    bounds,
                });
            }
        }
        Ok(ParticleField {
            particles: particles.iter().cloned().collect(),
            tokens: ArrayVec::new(),
            bounds,
            color: xfb::WHITE,
        })
    }

    /// Sets the color particles are drawn in.
    pub fn with_color(self, color: Color) -> Self {
        ParticleField { color, ..self }
    }

    /// Adds a token, returning its index for use with `steer`. The token
    /// must lie entirely inside the field bounds.
    pub fn add_token(&mut self, token: Token) -> Result<usize, ConfigError> {
        if token.size_x > self.bounds.width() || token.size_y > self.bounds.height() {
            return Err(ConfigError::RegionTooSmall {
                bounds: self.bounds,
                width: token.size_x,
                height: token.size_y,
            });
        }
        if !self
            .bounds
            .holds(token.pos_x, token.pos_y, token.size_x, token.size_y)
        {
            return Err(ConfigError::Misplaced {
                what: "token",
                index: self.tokens.len(),
                bounds: self.bounds,
            });
        }
        self.tokens
            .try_push(token)
            .map_err(|_| ConfigError::TooManyTokens {
                capacity: MAX_TOKENS,
            })?;
        Ok(self.tokens.len() - 1)
    }

    /// Moves token number `index` to vertical position `y`, clamped to the
    /// field bounds. Unknown tokens are ignored.
    pub fn steer(&mut self, index: usize, y: i32) {
        let bounds = self.bounds;
        if let Some(t) = self.tokens.get_mut(index) {
            t.track(y, &bounds);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Advances the simulation by one frame and draws the result.
    ///
    /// Each particle moves, bounces off whatever edges it crossed, and is then
    /// drawn at its new position. `on_collision` is called once for every
    /// bounce (twice for a particle that hits a corner). Tokens are drawn last.
    ///
    /// Returns the number of collisions.
    ///
    /// # Panics
    ///
    /// If the field bounds extend past the surface.
    pub fn tick<B>(
        &mut self,
        surface: &mut Surface<B>,
        mut on_collision: impl FnMut(Collision),
    ) -> usize
    where
        B: AsRef<[u32]> + AsMut<[u32]>,
    {
        let bounds = self.bounds;
        let color = self.color;
        let mut collisions = 0;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let pitch = p.pitch;
            p.advance(&bounds, |axis| {
                log::trace!("particle {} bounced on {:?}", i, axis);
                collisions += 1;
                on_collision(Collision {
                    particle: i,
                    axis,
                    pitch,
                });
            });
            p.render(surface, color);
        }
        for t in &self.tokens {
            t.render(surface);
        }
        collisions
    }
}

/// Picks uniformly from `a..=b`.
fn rnd<R: Rng>(rng: &mut R, a: i32, b: i32) -> i32 {
    rng.gen_range(a, b + 1)
}
