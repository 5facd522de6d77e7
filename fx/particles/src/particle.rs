use gfx::{Color, Surface};

use crate::Bounds;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// A rectangle moving at constant velocity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Particle {
    /// Top-left corner.
    pub pos_x: i32,
    pub pos_y: i32,
    pub size_x: i32,
    pub size_y: i32,
    /// Displacement per tick.
    pub dx: i32,
    pub dy: i32,
    /// Pitch of the sound this particle makes when it hits an edge. Motion
    /// ignores it.
    pub pitch: u32,
}

impl Particle {
    /// Moves by one tick's worth of velocity, then bounces off any edge of
    /// `bounds` it has crossed.
    ///
    /// The axes are handled independently, X first, so a particle can bounce
    /// off a corner; `on_bounce` is called once per axis that bounced.
    pub fn advance(&mut self, bounds: &Bounds, mut on_bounce: impl FnMut(Axis)) {
        self.pos_x += self.dx;
        self.pos_y += self.dy;

        if bounce(&mut self.pos_x, &mut self.dx, self.size_x, bounds.left, bounds.right) {
            on_bounce(Axis::X);
        }
        if bounce(&mut self.pos_y, &mut self.dy, self.size_y, bounds.top, bounds.bottom) {
            on_bounce(Axis::Y);
        }
    }

    /// Draws the particle as a filled rectangle.
    ///
    /// # Panics
    ///
    /// If any of it is off the surface.
    pub fn render<B>(&self, s: &mut Surface<B>, color: Color)
    where
        B: AsRef<[u32]> + AsMut<[u32]>,
    {
        s.fill_rect(
            self.pos_x,
            self.pos_y,
            self.pos_x + self.size_x - 1,
            self.pos_y + self.size_y - 1,
            color,
        );
    }
}

/// Applies the edge rule along one axis: a position below `lower` or above
/// `upper - size` reverses the velocity and is clamped back onto the edge it
/// crossed. Returns whether that happened.
fn bounce(pos: &mut i32, vel: &mut i32, size: i32, lower: i32, upper: i32) -> bool {
    let limit = upper - size;
    if *pos < lower || *pos > limit {
        *vel = -*vel;
        *pos = if *pos < lower { lower } else { limit };
        true
    } else {
        false
    }
}
