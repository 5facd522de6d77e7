//! Line and ellipse rasterization.
//!
//! The walkers here produce display coordinates and know nothing about
//! buffers, so they can be tested (and reused) on their own. `Surface` wraps
//! them with bounds checking.

use core::mem::swap;

use crate::{Color, Surface};

/// Walks the pixels of the line from `(x0, y0)` to `(x1, y1)`, inclusive of
/// both ends, calling `plot` for each.
///
/// This is the all-integer Bresenham walk: it tracks a combined error term
/// `err = dx + dy` (with `dy` negated) and steps along X, Y, or both each
/// iteration, stopping once both endpoints are reached on the same step.
///
/// Endpoints are put into top-to-bottom (then left-to-right) order first, so
/// the set of pixels visited doesn't depend on which end you start from.
pub fn walk_line(
    mut x0: i64,
    mut y0: i64,
    mut x1: i64,
    mut y1: i64,
    mut plot: impl FnMut(i64, i64),
) {
    if (y0, x0) > (y1, x1) {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Walks the outline of the axis-aligned ellipse centered on `(xm, ym)` with
/// semi-axes `a` (along X) and `b` (along Y), calling `plot` for each pixel.
///
/// One quadrant is computed and mirrored into the other three, so every
/// `(xm + dx, ym + dy)` is accompanied by `(xm - dx, ym + dy)`,
/// `(xm - dx, ym - dy)` and `(xm + dx, ym - dy)`. The main loop runs from the
/// top of the ellipse until `dy` goes negative; very flat ellipses stop short
/// of the tips, so a second loop then extends `dx` out to `a` along the center
/// row.
///
/// Pixels on the axes may be visited more than once.
///
/// Semi-axes are 16 bits so that the error term, which grows with `a² b`,
/// always fits in an `i64`.
pub fn walk_ellipse(xm: i64, ym: i64, a: u16, b: u16, mut plot: impl FnMut(i64, i64)) {
    let a = i64::from(a);
    let b = i64::from(b);

    if a == 0 && b == 0 {
        // The error term never moves for a point, so the loop below wouldn't
        // terminate.
        plot(xm, ym);
        return;
    }

    let a2 = a * a;
    let b2 = b * b;
    let mut dx = 0;
    let mut dy = b;
    let mut err = b2 - (2 * b - 1) * a2;

    loop {
        plot(xm + dx, ym + dy);
        plot(xm - dx, ym + dy);
        plot(xm - dx, ym - dy);
        plot(xm + dx, ym - dy);

        let e2 = 2 * err;
        if e2 < (2 * dx + 1) * b2 {
            dx += 1;
            err += (2 * dx + 1) * b2;
        }
        if e2 > -(2 * dy - 1) * a2 {
            dy -= 1;
            err -= (2 * dy - 1) * a2;
        }
        if dy < 0 {
            break;
        }
    }

    while dx < a {
        dx += 1;
        plot(xm + dx, ym);
        plot(xm - dx, ym);
    }
}

impl<B> Surface<B>
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    /// Draws a line between two points, in either order.
    ///
    /// # Panics
    ///
    /// If either endpoint is off the surface. (Every other pixel of the line
    /// lies between them, so that's sufficient.)
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.locate_or_panic(x0.into(), y0.into());
        self.locate_or_panic(x1.into(), y1.into());
        walk_line(x0.into(), y0.into(), x1.into(), y1.into(), |x, y| {
            self.plot(x, y, color)
        });
    }

    /// Draws the outline of an ellipse centered on `(xm, ym)`.
    ///
    /// # Panics
    ///
    /// If any part of the bounding box `[xm - a, xm + a] x [ym - b, ym + b]`
    /// is off the surface. This is checked before anything is drawn.
    pub fn draw_ellipse(&mut self, xm: i32, ym: i32, a: u16, b: u16, color: Color) {
        let (xm, ym) = (i64::from(xm), i64::from(ym));
        let (a64, b64) = (i64::from(a), i64::from(b));
        self.locate_or_panic(xm - a64, ym - b64);
        self.locate_or_panic(xm + a64, ym + b64);
        walk_ellipse(xm, ym, a, b, |x, y| self.plot(x, y, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn line_points(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
        let mut pts = vec![];
        walk_line(x0, y0, x1, y1, |x, y| pts.push((x, y)));
        pts
    }

    fn ellipse_points(a: u16, b: u16) -> BTreeSet<(i64, i64)> {
        let mut pts = BTreeSet::new();
        walk_ellipse(0, 0, a, b, |x, y| {
            pts.insert((x, y));
        });
        pts
    }

    fn cells(pts: &[(i64, i64)]) -> BTreeSet<(i64, i64)> {
        pts.iter().map(|&(x, y)| (x >> 1, y)).collect()
    }

    #[test]
    fn zero_length() {
        // A zero-length line should still set one pixel.
        assert_eq!(line_points(3, 4, 3, 4), vec![(3, 4)]);
    }

    #[test]
    fn horizontal_full() {
        let pts = line_points(0, 0, 99, 0);
        assert_eq!(pts.len(), 100);
        assert!(pts.iter().enumerate().all(|(i, &p)| p == (i as i64, 0)));
    }

    #[test]
    fn vertical_full() {
        let pts = line_points(0, 0, 0, 99);
        assert_eq!(pts.len(), 100);
        assert!(pts.iter().enumerate().all(|(i, &p)| p == (0, i as i64)));
    }

    #[test]
    fn diagonal_full() {
        let pts = line_points(0, 0, 99, 99);
        assert_eq!(pts.len(), 100);
        assert!(pts.iter().all(|&(x, y)| x == y));
    }

    #[test]
    fn shallow_line_steps_once_per_column() {
        let pts = line_points(0, 0, 10, 3);
        assert_eq!(pts.len(), 11);
        assert_eq!(pts.first(), Some(&(0, 0)));
        assert_eq!(pts.last(), Some(&(10, 3)));
        for w in pts.windows(2) {
            assert_eq!(w[1].0 - w[0].0, 1);
            assert!(w[1].1 - w[0].1 <= 1);
        }
    }

    #[test]
    fn direction_does_not_matter() {
        let cases = [
            (0, 0, 4, 2),
            (4, 2, 0, 0),
            (7, 1, 2, 9),
            (0, 5, 9, 5),
            (13, 0, 1, 11),
            (5, 5, 5, 0),
        ];
        for &(x0, y0, x1, y1) in &cases {
            let fwd = line_points(x0, y0, x1, y1);
            let rev = line_points(x1, y1, x0, y0);
            assert_eq!(cells(&fwd), cells(&rev));
        }
    }

    #[test]
    fn ellipse_is_four_way_symmetric() {
        for &(a, b) in &[(1, 1), (5, 3), (3, 5), (10, 1), (1, 10), (0, 4), (4, 0), (7, 7)] {
            let pts = ellipse_points(a, b);
            for &(x, y) in &pts {
                assert!(pts.contains(&(-x, y)), "({}, {}) in {}x{}", -x, y, a, b);
                assert!(pts.contains(&(-x, -y)));
                assert!(pts.contains(&(x, -y)));
            }
        }
    }

    #[test]
    fn ellipse_reaches_its_extremes() {
        for &(a, b) in &[(1, 1), (6, 2), (2, 6), (10, 1), (9, 9)] {
            let pts = ellipse_points(a, b);
            let (a, b) = (i64::from(a), i64::from(b));
            assert!(pts.contains(&(a, 0)), "right tip of {}x{}", a, b);
            assert!(pts.contains(&(0, b)), "bottom tip of {}x{}", a, b);
            assert!(pts.iter().all(|&(x, y)| x.abs() <= a && y.abs() <= b));
        }
    }

    #[test]
    fn widest_ellipse_terminates_within_its_box() {
        let m = i64::from(u16::MAX);
        for &(a, b) in &[(u16::MAX, u16::MAX), (u16::MAX, 1), (1, u16::MAX)] {
            let (mut max_x, mut max_y) = (0, 0);
            walk_ellipse(0, 0, a, b, |x, y| {
                assert!(x.abs() <= m && y.abs() <= m);
                max_x = max_x.max(x.abs());
                max_y = max_y.max(y.abs());
            });
            assert_eq!((max_x, max_y), (i64::from(a), i64::from(b)));
        }
    }

    #[test]
    fn degenerate_ellipse_is_a_point() {
        let pts = ellipse_points(0, 0);
        assert_eq!(pts.into_iter().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn surface_line_and_ellipse() {
        let mut s = Surface::new(vec![0; 8 * 16], 16, 16).unwrap();
        s.draw_line(0, 0, 15, 15, 1);
        assert_eq!(s.get(15, 15), Ok(1));
        assert_eq!(s.get(0, 15), Ok(0));
        s.draw_ellipse(8, 8, 4, 2, 2);
        assert_eq!(s.get(12, 8), Ok(2));
        assert_eq!(s.get(4, 8), Ok(2));
        assert_eq!(s.get(8, 6), Ok(2));
        assert_eq!(s.get(8, 10), Ok(2));
    }

    #[test]
    #[should_panic]
    fn line_off_surface() {
        let mut s = Surface::new(vec![0; 8 * 16], 16, 16).unwrap();
        s.draw_line(0, 0, 16, 3, 1);
    }

    #[test]
    #[should_panic]
    fn ellipse_off_surface() {
        let mut s = Surface::new(vec![0; 8 * 16], 16, 16).unwrap();
        s.draw_ellipse(2, 8, 3, 1, 1);
    }
}
