//! Video output.

use core::fmt;

/// Something that can show packed frames.
///
/// The display decides the frame geometry at startup; the demo asks for it
/// once and sizes its buffers to match.
pub trait Display {
    /// Width in pixels. Always even, since each word holds two pixels.
    fn width(&self) -> usize;
    /// Height in pixels.
    fn height(&self) -> usize;

    /// Hands a completed frame to the display. The frame must stay untouched
    /// until the next call.
    fn present(&mut self, frame: &[u32]);

    /// Blocks until the next vertical blanking interval. This is the only
    /// point where the frame loop waits.
    fn wait_vsync(&mut self);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DisplayError {
    /// The display reported a zero dimension.
    Empty { width: usize, height: usize },
    /// The display reported an odd width or height.
    Odd { width: usize, height: usize },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisplayError::Empty { width, height } => {
                write!(f, "display mode {}x{} has no pixels", width, height)
            }
            DisplayError::Odd { width, height } => write!(
                f,
                "display mode {}x{} has an odd dimension",
                width, height
            ),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for DisplayError {}

/// Reads the display geometry, checking that both dimensions are even and
/// non-zero.
pub fn dimensions<D: Display + ?Sized>(
    display: &D,
) -> Result<(usize, usize), DisplayError> {
    let (width, height) = (display.width(), display.height());
    if width == 0 || height == 0 {
        Err(DisplayError::Empty { width, height })
    } else if width % 2 != 0 || height % 2 != 0 {
        Err(DisplayError::Odd { width, height })
    } else {
        log::info!("display mode {}x{}", width, height);
        Ok((width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize, usize);

    impl Display for Fixed {
        fn width(&self) -> usize {
            self.0
        }
        fn height(&self) -> usize {
            self.1
        }
        fn present(&mut self, _: &[u32]) {}
        fn wait_vsync(&mut self) {}
    }

    #[test]
    fn accepts_even_modes() {
        assert_eq!(dimensions(&Fixed(640, 480)), Ok((640, 480)));
        assert_eq!(dimensions(&Fixed(640, 528)), Ok((640, 528)));
    }

    #[test]
    fn rejects_odd_and_empty() {
        assert_eq!(
            dimensions(&Fixed(641, 480)),
            Err(DisplayError::Odd {
                width: 641,
                height: 480
            })
        );
        assert_eq!(
            dimensions(&Fixed(0, 480)),
            Err(DisplayError::Empty {
                width: 0,
                height: 480
            })
        );
    }
}
