//! Interface between demo effects and whatever runs them.

#![cfg_attr(not(test), no_std)]

pub mod decor;

use gfx::Surface;
use xfb::audio::Audio;
use xfb::input::Input;

/// Everything an effect may touch while producing one frame.
pub struct Frame<'a> {
    /// Frame counter, starting at zero.
    pub number: usize,
    /// The back buffer, already cleared to the background color.
    pub surface: Surface<&'a mut [u32]>,
    /// Input, already scanned for this frame.
    pub input: &'a mut dyn Input,
    pub audio: &'a mut dyn Audio,
}

pub trait Demo {
    fn render_frame(&mut self, frame: Frame<'_>);
}
