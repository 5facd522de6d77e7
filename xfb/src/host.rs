//! Host implementations of the platform contracts.
//!
//! None of these touch real hardware. They exist so demos can run headless
//! (in tests, or from the command line) with behavior close enough to the
//! console to exercise the same code paths: a mixer that runs out of voices,
//! remotes that take a while to wake up, and a display that just remembers
//! what it was shown.

use crate::audio::{Audio, Tone, Voice};
use crate::display::Display;
use crate::input::{Channel, ChannelStatus, Input, IrSample};

/// A display with no screen. It keeps a copy of the last frame presented.
#[derive(Debug)]
pub struct HeadlessDisplay {
    width: usize,
    height: usize,
    last: Vec<u32>,
    presented: usize,
    vsyncs: usize,
}

impl HeadlessDisplay {
    pub fn new(width: usize, height: usize) -> Self {
        HeadlessDisplay {
            width,
            height,
            last: vec![0; width / 2 * height],
            presented: 0,
            vsyncs: 0,
        }
    }

    pub fn last_frame(&self) -> &[u32] {
        &self.last
    }

    pub fn frames_presented(&self) -> usize {
        self.presented
    }

    pub fn vsyncs(&self) -> usize {
        self.vsyncs
    }
}

impl Display for HeadlessDisplay {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn present(&mut self, frame: &[u32]) {
        self.last.clear();
        self.last.extend_from_slice(frame);
        self.presented += 1;
    }

    fn wait_vsync(&mut self) {
        self.vsyncs += 1;
    }
}

/// Number of voices on the console mixer.
pub const MAX_VOICES: usize = 16;

/// A mixer that tracks which voices are busy but produces no sound.
///
/// A triggered voice stays busy for `hold_frames` frames.
#[derive(Debug)]
pub struct VoicePool {
    remaining: [u32; MAX_VOICES],
    hold_frames: u32,
    triggered: usize,
    last_tone: Option<Tone>,
}

impl VoicePool {
    pub fn new(hold_frames: u32) -> Self {
        VoicePool {
            remaining: [0; MAX_VOICES],
            hold_frames,
            triggered: 0,
            last_tone: None,
        }
    }

    /// Total tones started since creation.
    pub fn triggered(&self) -> usize {
        self.triggered
    }

    pub fn last_tone(&self) -> Option<Tone> {
        self.last_tone
    }

    pub fn busy_voices(&self) -> usize {
        self.remaining.iter().filter(|&&r| r > 0).count()
    }
}

impl Audio for VoicePool {
    fn first_unused_voice(&mut self) -> Option<Voice> {
        self.remaining
            .iter()
            .position(|&r| r == 0)
            .map(|i| Voice(i as u8))
    }

    fn set_voice(&mut self, voice: Voice, tone: Tone) {
        // Zero-length holds would make the voice look free immediately.
        self.remaining[usize::from(voice.0)] = self.hold_frames.max(1);
        self.triggered += 1;
        self.last_tone = Some(tone);
    }

    fn frame(&mut self) {
        for r in self.remaining.iter_mut() {
            *r = r.saturating_sub(1);
        }
    }
}

/// Synthetic remotes whose cursors sweep back and forth across the screen.
///
/// Channels below `connected` report `NotReady` for the first `warm_up`
/// scans, then `Ready`. Each channel moves at a different rate so that cursors
/// don't overlap. If `dropout_every` is non-zero, every that-many scans the
/// reading is marked invalid, as happens when a remote loses sight of the
/// sensor bar.
#[derive(Debug)]
pub struct SweepInput {
    width: usize,
    height: usize,
    connected: usize,
    warm_up: usize,
    dropout_every: usize,
    scans: usize,
}

impl SweepInput {
    pub fn new(width: usize, height: usize, connected: usize) -> Self {
        SweepInput {
            width,
            height,
            connected,
            warm_up: 0,
            dropout_every: 0,
            scans: 0,
        }
    }

    pub fn with_warm_up(self, warm_up: usize) -> Self {
        SweepInput { warm_up, ..self }
    }

    pub fn with_dropouts(self, dropout_every: usize) -> Self {
        SweepInput {
            dropout_every,
            ..self
        }
    }
}

/// Folds `t` into a triangle wave running `0..=span` and back.
fn triangle(t: usize, span: usize) -> usize {
    if span == 0 {
        return 0;
    }
    let phase = t % (2 * span);
    if phase <= span {
        phase
    } else {
        2 * span - phase
    }
}

impl Input for SweepInput {
    fn scan(&mut self) {
        self.scans += 1;
    }

    fn probe(&mut self, channel: Channel) -> ChannelStatus {
        if channel >= self.connected {
            ChannelStatus::NotConnected
        } else if self.scans <= self.warm_up {
            ChannelStatus::NotReady
        } else {
            ChannelStatus::Ready
        }
    }

    fn ir(&mut self, channel: Channel) -> IrSample {
        let t = self.scans;
        let dropped = self.dropout_every != 0 && t % self.dropout_every == 0;
        let rate = 3 + 2 * channel;
        IrSample {
            valid: !dropped,
            x: triangle(t * rate, self.width - 1) as f32,
            y: triangle(t * (rate + 1) + channel * self.height / 2, self.height - 1)
                as f32,
            distance: 1.5,
            angle: 0.,
        }
    }
}
