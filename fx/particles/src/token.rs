use gfx::{Color, Surface};

use crate::Bounds;

/// A rectangle placed by input instead of physics. Tokens never move on their
/// own and never bounce; they are drawn the same way particles are.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub pos_x: i32,
    pub pos_y: i32,
    pub size_x: i32,
    pub size_y: i32,
    pub color: Color,
}

impl Token {
    /// Moves the token's top edge to `y`, kept inside `bounds`.
    pub fn track(&mut self, y: i32, bounds: &Bounds) {
        self.pos_y = y.min(bounds.bottom - self.size_y).max(bounds.top);
    }

    pub fn render<B>(&self, s: &mut Surface<B>)
    where
        B: AsRef<[u32]> + AsMut<[u32]>,
    {
        s.fill_rect(
            self.pos_x,
            self.pos_y,
            self.pos_x + self.size_x - 1,
            self.pos_y + self.size_y - 1,
            self.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_clamps() {
        let b = Bounds::inset_percent(200, 100, 10);
        let mut t = Token {
            pos_x: 30,
            pos_y: 40,
            size_x: 4,
            size_y: 20,
            color: 1,
        };
        t.track(50, &b);
        assert_eq!(t.pos_y, 50);
        t.track(-100, &b);
        assert_eq!(t.pos_y, 10);
        t.track(89, &b);
        assert_eq!(t.pos_y, 70);
        assert_eq!(t.pos_x, 30);
    }
}
