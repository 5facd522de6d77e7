//! Platform contracts for packed-framebuffer demos.
//!
//! A demo needs four things from the platform: somewhere to show frames
//! (`display`), something to make noise (`audio`), pointing devices
//! (`input`), and a way to be told to stop (`shutdown`). This crate defines
//! those as small traits so the simulation and rendering code can run against
//! real hardware bindings or the host implementations in `host`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod audio;
pub mod display;
pub mod input;
pub mod shutdown;

/// Representation of a pixel pair in memory.
///
/// Each word covers two horizontally adjacent pixels, encoded as
/// `Y0 Cb Y1 Cr` (one luma sample per pixel, shared chroma). The drawing code
/// treats it as opaque.
pub type Pixel = gfx::Color;

pub const BLACK: Pixel = 0x0080_0080;
pub const WHITE: Pixel = 0xFF80_FF80;
pub const RED: Pixel = 0x4C54_4CFF;
pub const GREEN: Pixel = 0x4B55_4B4A;
pub const BLUE: Pixel = 0x1DFF_1D6B;
pub const YELLOW: Pixel = 0xE100_E194;

cfg_if::cfg_if! {
    if #[cfg(any(test, feature = "std"))] {
        pub mod host;
    }
}
