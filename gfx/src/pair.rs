//! Double buffering.

use core::mem::swap;

use crate::{check_geometry, Surface, SurfaceError};

/// Two equally sized packed framebuffers, one being drawn and one being
/// shown.
///
/// Drawing always goes to the `back` buffer. Once a frame is complete,
/// `swap` makes it the `front` buffer, which is what gets handed to the
/// display. The buffer that was on display becomes the new back buffer, so
/// nothing is ever drawn into the frame currently being presented.
#[derive(Debug)]
pub struct FramePair<B> {
    front: B,
    back: B,
    width: usize,
    height: usize,
}

impl<B> FramePair<B>
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    pub fn new(
        front: B,
        back: B,
        width: usize,
        height: usize,
    ) -> Result<Self, SurfaceError> {
        check_geometry(front.as_ref().len(), width, height)?;
        check_geometry(back.as_ref().len(), width, height)?;
        Ok(FramePair {
            front,
            back,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrows the back buffer for drawing.
    pub fn back(&mut self) -> Surface<&mut [u32]> {
        // Geometry was checked at construction.
        Surface {
            buf: self.back.as_mut(),
            width: self.width,
            height: self.height,
        }
    }

    /// The most recently completed frame.
    pub fn front(&self) -> &[u32] {
        self.front.as_ref()
    }

    /// Exchanges the front and back buffers. Call this once per completed
    /// frame, before presenting `front`.
    pub fn swap(&mut self) {
        swap(&mut self.front, &mut self.back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> FramePair<Vec<u32>> {
        FramePair::new(vec![0; 4 * 4], vec![0; 4 * 4], 8, 4).unwrap()
    }

    #[test]
    fn drawing_goes_to_back() {
        let mut p = pair();
        p.back().set_pixel(2, 1, 7);
        assert!(p.front().iter().all(|&w| w == 0));
        p.swap();
        assert_eq!(p.front()[5], 7);
    }

    #[test]
    fn swap_alternates() {
        let mut p = pair();
        p.back().clear(1);
        p.swap();
        p.back().clear(2);
        assert!(p.front().iter().all(|&w| w == 1));
        p.swap();
        assert!(p.front().iter().all(|&w| w == 2));
        // The old front is back, untouched since it was shown.
        assert!(p.back().as_words().iter().all(|&w| w == 1));
    }

    #[test]
    fn rejects_mismatched_buffers() {
        assert_eq!(
            FramePair::new(vec![0; 16], vec![0; 15], 8, 4).unwrap_err(),
            SurfaceError::SizeMismatch {
                expected: 16,
                actual: 15
            }
        );
    }
}
