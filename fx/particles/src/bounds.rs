use gfx::{Color, Surface};

/// The region particles are confined to.
///
/// `left` and `top` are inclusive, `right` and `bottom` exclusive: a particle
/// of width `w` may sit anywhere from `left` to `right - w`, and then covers
/// pixels up to `right - 1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// The whole `width` x `height` screen.
    pub fn full(width: usize, height: usize) -> Self {
        Bounds {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        }
    }

    /// The screen minus a margin of `percent` of its width (left and right)
    /// and height (top and bottom).
    pub fn inset_percent(width: usize, height: usize, percent: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        let mx = w * percent as i32 / 100;
        let my = h * percent as i32 / 100;
        Bounds {
            left: mx,
            top: my,
            right: w - mx,
            bottom: h - my,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Checks that a `size_x` x `size_y` rectangle with its top-left corner at
    /// `(x, y)` is non-empty and lies entirely inside the region.
    pub fn holds(&self, x: i32, y: i32, size_x: i32, size_y: i32) -> bool {
        size_x >= 1
            && size_y >= 1
            && x >= self.left
            && y >= self.top
            && x <= self.right - size_x
            && y <= self.bottom - size_y
    }

    /// Draws the outermost pixels a particle can cover.
    pub fn outline<B>(&self, s: &mut Surface<B>, color: Color)
    where
        B: AsRef<[u32]> + AsMut<[u32]>,
    {
        s.draw_box(self.left, self.top, self.right - 1, self.bottom - 1, color);
    }
}
