//! Packed-framebuffer graphics algorithms.
//!
//! The framebuffers we draw into store one 32-bit word for every *two*
//! horizontally adjacent pixels. Drawing code works in display coordinates,
//! `(x, y)` with `x` in `0..width` and `y` in `0..height`, and every primitive
//! reduces to a single addressing rule:
//!
//! ```text
//! index(x, y) = (width / 2) * y + (x >> 1)
//! ```
//!
//! Nothing in here knows about the display hardware, so all of it runs under
//! test on the host.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod line;
mod pair;

pub use line::{walk_ellipse, walk_line};
pub use pair::FramePair;

use core::fmt;

/// An opaque packed color word. The graphics code never looks inside it.
pub type Color = u32;

/// Computes the word index of display coordinate `(x, y)` in a packed buffer
/// that is `width` pixels wide.
///
/// Two adjacent columns (`2n` and `2n + 1`) share a word.
#[inline]
pub fn packed_index(width: usize, x: usize, y: usize) -> usize {
    (width / 2) * y + (x >> 1)
}

/// A coordinate fell outside the surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OutOfBounds {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "pixel ({}, {}) outside {}x{} surface",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for OutOfBounds {}

/// Reasons a buffer can't be used as a `Surface`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SurfaceError {
    /// Width must be even, since each word holds two columns.
    OddWidth(usize),
    /// Width or height was zero.
    Empty,
    /// The buffer isn't exactly `width / 2 * height` words long.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SurfaceError::OddWidth(w) => {
                write!(f, "surface width {} is not even", w)
            }
            SurfaceError::Empty => f.write_str("surface has no pixels"),
            SurfaceError::SizeMismatch { expected, actual } => write!(
                f,
                "buffer holds {} words, surface needs {}",
                actual, expected
            ),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for SurfaceError {}

/// Checks that a buffer of `len` words can back a `width` x `height` surface.
pub(crate) fn check_geometry(
    len: usize,
    width: usize,
    height: usize,
) -> Result<(), SurfaceError> {
    if width == 0 || height == 0 {
        return Err(SurfaceError::Empty);
    }
    if width % 2 != 0 {
        return Err(SurfaceError::OddWidth(width));
    }
    let expected = (width / 2) * height;
    if len != expected {
        return Err(SurfaceError::SizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// A packed framebuffer plus the drawing primitives that operate on it.
///
/// `B` is anything that can be viewed as a slice of words: a `Vec<u32>`, a
/// `&'static mut [u32; N]`, or a borrowed `&mut [u32]` (see
/// `FramePair::back`).
///
/// Every primitive validates its full extent before writing and panics if any
/// part of it would land outside the surface. Without that check an x past the
/// right edge would silently wrap into the next row.
#[derive(Debug)]
pub struct Surface<B> {
    buf: B,
    width: usize,
    height: usize,
}

impl<B> Surface<B>
where
    B: AsRef<[u32]>,
{
    /// Wraps `buf` as a `width` x `height` surface.
    pub fn new(buf: B, width: usize, height: usize) -> Result<Self, SurfaceError> {
        check_geometry(buf.as_ref().len(), width, height)?;
        Ok(Surface { buf, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of words per row.
    pub fn stride(&self) -> usize {
        self.width / 2
    }

    pub fn as_words(&self) -> &[u32] {
        self.buf.as_ref()
    }

    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Checks whether `(x, y)` is on the surface.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.locate(x.into(), y.into()).is_ok()
    }

    /// Computes the word index of `(x, y)`, or reports why it has none.
    pub fn checked_index(&self, x: i32, y: i32) -> Result<usize, OutOfBounds> {
        self.locate(x.into(), y.into())
    }

    /// Reads the word covering `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Color, OutOfBounds> {
        let i = self.checked_index(x, y)?;
        Ok(self.buf.as_ref()[i])
    }

    pub(crate) fn locate(&self, x: i64, y: i64) -> Result<usize, OutOfBounds> {
        if x < 0 || y < 0 || x as u64 >= self.width as u64 || y as u64 >= self.height as u64 {
            return Err(OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(packed_index(self.width, x as usize, y as usize))
    }

    /// Like `locate`, but treats an out-of-bounds coordinate as the caller
    /// bug it is.
    pub(crate) fn locate_or_panic(&self, x: i64, y: i64) -> usize {
        match self.locate(x, y) {
            Ok(i) => i,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<B> Surface<B>
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    pub fn as_words_mut(&mut self) -> &mut [u32] {
        self.buf.as_mut()
    }

    /// Sets every word to `color`.
    pub fn clear(&mut self, color: Color) {
        for word in self.buf.as_mut() {
            *word = color;
        }
    }

    /// Writes the word covering `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is off the surface.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.plot(x.into(), y.into(), color)
    }

    /// Writes the word covering `(x, y)`, or reports that it's off the
    /// surface without writing anything.
    pub fn try_set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), OutOfBounds> {
        let i = self.checked_index(x, y)?;
        self.buf.as_mut()[i] = color;
        Ok(())
    }

    pub(crate) fn plot(&mut self, x: i64, y: i64, color: Color) {
        let i = self.locate_or_panic(x, y);
        self.buf.as_mut()[i] = color;
    }

    /// Draws a horizontal run on row `y` covering the words from `x1 >> 1`
    /// through `x2 >> 1`, inclusive.
    ///
    /// The caller is expected to order the endpoints. If `x1 >> 1` is past
    /// `x2 >> 1`, nothing is drawn.
    ///
    /// # Panics
    ///
    /// If either endpoint is off the surface.
    pub fn draw_hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        let start = self.locate_or_panic(x1.into(), y.into());
        let end = self.locate_or_panic(x2.into(), y.into());
        if start <= end {
            for word in &mut self.buf.as_mut()[start..=end] {
                *word = color;
            }
        }
    }

    /// Draws a vertical run in the word column `x >> 1`, rows `y1` through
    /// `y2` inclusive.
    ///
    /// The caller is expected to order the endpoints. If `y1 > y2`, nothing is
    /// drawn.
    ///
    /// # Panics
    ///
    /// If either endpoint is off the surface.
    pub fn draw_vline(&mut self, x: i32, y1: i32, y2: i32, color: Color) {
        let top = self.locate_or_panic(x.into(), y1.into());
        let bottom = self.locate_or_panic(x.into(), y2.into());
        if top <= bottom {
            let stride = self.stride();
            let words = self.buf.as_mut();
            for i in (top..=bottom).step_by(stride) {
                words[i] = color;
            }
        }
    }

    /// Outlines the rectangle with corners `(x1, y1)` and `(x2, y2)`.
    ///
    /// Same ordering rules and panics as `draw_hline`/`draw_vline`.
    pub fn draw_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.draw_hline(x1, x2, y1, color);
        self.draw_hline(x1, x2, y2, color);
        self.draw_vline(x1, y1, y2, color);
        self.draw_vline(x2, y1, y2, color);
    }

    /// Fills the rectangle with corners `(x1, y1)` and `(x2, y2)`, one
    /// `draw_hline` per row.
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        for y in y1..=y2 {
            self.draw_hline(x1, x2, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 16;
    const H: usize = 8;

    fn surface() -> Surface<Vec<u32>> {
        Surface::new(vec![0; W / 2 * H], W, H).unwrap()
    }

    fn check_cells(s: &Surface<Vec<u32>>, pred: impl Fn(usize, usize) -> bool) {
        let stride = s.stride();
        for (i, &w) in s.as_words().iter().enumerate() {
            let (cx, y) = (i % stride, i / stride);
            if pred(cx, y) {
                assert_eq!(w, 1, "Cell ({}, {}) should be set", cx, y);
            } else {
                assert_eq!(w, 0, "Cell ({}, {}) should not be set", cx, y);
            }
        }
    }

    #[test]
    fn index_of_last_pixel() {
        assert_eq!(packed_index(640, 639, 479), 153599);
        assert_eq!(packed_index(640, 0, 0), 0);
        assert_eq!(packed_index(640, 0, 1), 320);
    }

    #[test]
    fn adjacent_columns_share_a_word() {
        for width in (2..=64).step_by(2) {
            for y in 0..4 {
                let mut prev = 0;
                for x in 0..width {
                    let i = packed_index(width, x, y);
                    assert!(i >= prev, "index must not decrease along x");
                    prev = i;
                    if x % 2 == 0 {
                        assert_eq!(i, packed_index(width, x + 1, y));
                    }
                }
            }
        }
    }

    #[test]
    fn rejects_bad_geometry() {
        assert_eq!(
            Surface::new(vec![0; 12], 7, 4).unwrap_err(),
            SurfaceError::OddWidth(7)
        );
        assert_eq!(
            Surface::new(vec![0; 0], 0, 4).unwrap_err(),
            SurfaceError::Empty
        );
        assert_eq!(
            Surface::new(vec![0; 10], 8, 4).unwrap_err(),
            SurfaceError::SizeMismatch {
                expected: 16,
                actual: 10
            }
        );
    }

    #[test]
    fn set_pixel_covers_pair() {
        let mut s = surface();
        s.set_pixel(5, 3, 1);
        assert_eq!(s.get(4, 3), Ok(1));
        assert_eq!(s.get(5, 3), Ok(1));
        check_cells(&s, |cx, y| cx == 2 && y == 3);
    }

    #[test]
    #[should_panic]
    fn set_pixel_past_right_edge() {
        // Would otherwise land on the first word of row 1.
        surface().set_pixel(W as i32, 0, 1);
    }

    #[test]
    #[should_panic]
    fn set_pixel_negative() {
        surface().set_pixel(0, -1, 1);
    }

    #[test]
    fn try_set_pixel_reports() {
        let mut s = surface();
        let err = s.try_set_pixel(3, H as i32, 1).unwrap_err();
        assert_eq!(err.y, H as i64);
        check_cells(&s, |_, _| false);
    }

    #[test]
    fn hline_inclusive() {
        let mut s = surface();
        s.draw_hline(2, 9, 1, 1);
        check_cells(&s, |cx, y| y == 1 && cx >= 1 && cx <= 4);
    }

    #[test]
    fn hline_reversed_draws_nothing() {
        let mut s = surface();
        s.draw_hline(9, 2, 1, 1);
        check_cells(&s, |_, _| false);
    }

    #[test]
    fn hline_reversed_within_word() {
        // 3 >> 1 == 2 >> 1, so the empty-looking range still covers a word.
        let mut s = surface();
        s.draw_hline(3, 2, 0, 1);
        check_cells(&s, |cx, y| cx == 1 && y == 0);
    }

    #[test]
    #[should_panic]
    fn hline_off_edge() {
        surface().draw_hline(0, W as i32, 0, 1);
    }

    #[test]
    fn vline_inclusive() {
        let mut s = surface();
        s.draw_vline(7, 2, 5, 1);
        check_cells(&s, |cx, y| cx == 3 && y >= 2 && y <= 5);
    }

    #[test]
    fn vline_reversed_draws_nothing() {
        let mut s = surface();
        s.draw_vline(7, 5, 2, 1);
        check_cells(&s, |_, _| false);
    }

    #[test]
    fn box_is_outline() {
        let mut s = surface();
        s.draw_box(2, 1, 11, 6, 1);
        check_cells(&s, |cx, y| {
            let on_row = (y == 1 || y == 6) && cx >= 1 && cx <= 5;
            let on_col = (cx == 1 || cx == 5) && y >= 1 && y <= 6;
            on_row || on_col
        });
    }

    #[test]
    fn fill_rect_is_solid() {
        let mut s = surface();
        s.fill_rect(4, 2, 7, 3, 1);
        check_cells(&s, |cx, y| (cx == 2 || cx == 3) && (y == 2 || y == 3));
    }

    #[test]
    fn single_pixel_rect() {
        let mut s = surface();
        s.fill_rect(8, 4, 8, 4, 1);
        check_cells(&s, |cx, y| cx == 4 && y == 4);
    }

    #[test]
    fn clear_fills_everything() {
        let mut s = surface();
        s.clear(0x0080_0080);
        assert!(s.as_words().iter().all(|&w| w == 0x0080_0080));
    }
}
