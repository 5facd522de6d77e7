//! Runs demo effects on the host, against the headless implementations in
//! `xfb::host`.
//!
//! `Sim` is the frame loop: it owns a pair of framebuffers, the platform
//! pieces and a demo, and drives one frame per `step`.

mod args;

pub use args::Args;

use core::fmt;

use gfx::{FramePair, SurfaceError};
use xfb::audio::Audio;
use xfb::display::{self, Display, DisplayError};
use xfb::input::Input;
use xfb::shutdown::{ShutdownFlag, ShutdownReason};
use xfb_fx_common::{Demo, Frame};

/// Reasons a `Sim` can't be set up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SetupError {
    Display(DisplayError),
    Buffers(SurfaceError),
}

impl From<DisplayError> for SetupError {
    fn from(e: DisplayError) -> Self {
        SetupError::Display(e)
    }
}

impl From<SurfaceError> for SetupError {
    fn from(e: SurfaceError) -> Self {
        SetupError::Buffers(e)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetupError::Display(e) => write!(f, "unusable display: {}", e),
            SetupError::Buffers(e) => write!(f, "can't allocate framebuffers: {}", e),
        }
    }
}

impl std::error::Error for SetupError {}

pub struct Sim<'f, S, D, I, A> {
    demo: S,
    frames: FramePair<Vec<u32>>,
    display: D,
    input: I,
    audio: A,
    shutdown: &'f ShutdownFlag,
    frame: usize,
    frame_limit: Option<usize>,
}

impl<'f, S, D, I, A> Sim<'f, S, D, I, A>
where
    S: Demo,
    D: Display,
    I: Input,
    A: Audio,
{
    /// Allocates framebuffers to match `display`.
    pub fn new(
        demo: S,
        display: D,
        input: I,
        audio: A,
        shutdown: &'f ShutdownFlag,
    ) -> Result<Self, SetupError> {
        let (width, height) = display::dimensions(&display)?;
        let words = width / 2 * height;
        let frames = FramePair::new(
            vec![xfb::BLACK; words],
            vec![xfb::BLACK; words],
            width,
            height,
        )?;
        Ok(Sim {
            demo,
            frames,
            display,
            input,
            audio,
            shutdown,
            frame: 0,
            frame_limit: None,
        })
    }

    /// Requests `ShutdownReason::Exit` once `limit` frames have been shown.
    pub fn with_frame_limit(self, limit: Option<usize>) -> Self {
        Sim {
            frame_limit: limit,
            ..self
        }
    }

    /// Produces and shows one frame.
    pub fn step(&mut self) {
        let mut back = self.frames.back();
        back.clear(xfb::BLACK);

        self.input.scan();
        self.demo.render_frame(Frame {
            number: self.frame,
            surface: back,
            input: &mut self.input,
            audio: &mut self.audio,
        });

        self.frames.swap();
        self.display.present(self.frames.front());
        self.audio.frame();
        self.display.wait_vsync();

        self.frame += 1;
        log::trace!("frame {} done", self.frame);
        if Some(self.frame) == self.frame_limit {
            self.shutdown.request(ShutdownReason::Exit);
        }
    }

    /// Steps until something requests a shutdown, and says why.
    pub fn run(&mut self) -> ShutdownReason {
        log::info!(
            "running at {}x{}",
            self.frames.width(),
            self.frames.height()
        );
        while !self.shutdown.is_requested() {
            self.step();
        }
        let reason = self.shutdown.reason();
        log::info!("stopped after {} frames: {:?}", self.frame, reason);
        reason
    }

    /// Frames completed so far.
    pub fn frames_shown(&self) -> usize {
        self.frame
    }

    pub fn demo(&self) -> &S {
        &self.demo
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
