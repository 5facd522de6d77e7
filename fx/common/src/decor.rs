//! Static screen furniture shared by the demos.

use gfx::{Color, Surface};
use xfb::input::Cursor;

/// Half the side of the box marking the screen center.
pub const CENTER_MARK: i32 = 10;

/// Semi-axis of the cursor ring.
pub const CURSOR_RADIUS: u16 = 6;

/// Outlines the screen, one pixel in from the top and left edges.
pub fn border<B>(s: &mut Surface<B>, color: Color)
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    let (w, h) = (s.width() as i32, s.height() as i32);
    s.draw_box(1, 1, w - 1, h - 1, color);
}

/// Draws a small box around the screen center with a dot in the middle.
///
/// On a surface too small to hold the box, only the dot is drawn.
pub fn center_marker<B>(s: &mut Surface<B>, color: Color)
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    let (cx, cy) = (s.width() as i32 >> 1, s.height() as i32 >> 1);
    if s.contains(cx - CENTER_MARK, cy - CENTER_MARK)
        && s.contains(cx + CENTER_MARK, cy + CENTER_MARK)
    {
        s.draw_box(
            cx - CENTER_MARK,
            cy - CENTER_MARK,
            cx + CENTER_MARK,
            cy + CENTER_MARK,
            color,
        );
    }
    s.fill_rect(cx, cy, cx, cy, color);
}

/// Draws a ring with a dot in the middle at `cursor`.
///
/// The ring is pulled inward so it always fits on the surface; the dot is
/// always exactly on the cursor (which must be on the surface). Nothing is
/// drawn if the cursor is off the surface.
pub fn cursor_marker<B>(s: &mut Surface<B>, cursor: Cursor, color: Color)
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    if !s.contains(cursor.x, cursor.y) {
        return;
    }
    let r = i32::from(CURSOR_RADIUS);
    let (w, h) = (s.width() as i32, s.height() as i32);
    if w > 2 * r && h > 2 * r {
        let x = cursor.x.max(r).min(w - 1 - r);
        let y = cursor.y.max(r).min(h - 1 - r);
        s.draw_ellipse(x, y, CURSOR_RADIUS, CURSOR_RADIUS, color);
    }
    s.set_pixel(cursor.x, cursor.y, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: usize, h: usize) -> Surface<Vec<u32>> {
        Surface::new(vec![0; w / 2 * h], w, h).unwrap()
    }

    #[test]
    fn border_touches_far_edges() {
        let mut s = surface(64, 32);
        border(&mut s, 1);
        assert_eq!(s.get(63, 31), Ok(1));
        assert_eq!(s.get(1, 1), Ok(1));
        assert_eq!(s.get(32, 16), Ok(0));
    }

    #[test]
    fn center_marker_is_centered() {
        let mut s = surface(64, 32);
        center_marker(&mut s, 1);
        assert_eq!(s.get(32, 16), Ok(1));
        assert_eq!(s.get(22, 6), Ok(1));
        assert_eq!(s.get(42, 26), Ok(1));
        assert_eq!(s.get(28, 16), Ok(0));
    }

    #[test]
    fn center_marker_on_tiny_surface_is_just_a_dot() {
        let mut s = surface(8, 8);
        center_marker(&mut s, 1);
        assert_eq!(s.get(4, 4), Ok(1));
        assert_eq!(s.as_words().iter().filter(|&&w| w == 1).count(), 1);

        // Exactly big enough: box corners on the last row and column.
        let mut s = surface(22, 21);
        center_marker(&mut s, 1);
        assert_eq!(s.get(1, 0), Ok(1));
        assert_eq!(s.get(21, 20), Ok(1));
    }

    #[test]
    fn cursor_in_corner_stays_on_surface() {
        let mut s = surface(64, 32);
        cursor_marker(&mut s, Cursor { x: 0, y: 31 }, 1);
        assert_eq!(s.get(0, 31), Ok(1));
        cursor_marker(&mut s, Cursor { x: 63, y: 0 }, 1);
        assert_eq!(s.get(63, 0), Ok(1));
    }

    #[test]
    fn cursor_off_surface_is_ignored() {
        let mut s = surface(64, 32);
        cursor_marker(&mut s, Cursor { x: -3, y: 200 }, 1);
        assert!(s.as_words().iter().all(|&w| w == 0));
    }
}
