//! Pointing input.
//!
//! Remotes report an infrared cursor position. Channels come and go, and a
//! connected remote may not have a usable reading yet; neither is an error.
//! Callers just skip the update for that frame.

/// Index of a controller slot.
pub type Channel = usize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChannelStatus {
    NotConnected,
    NotReady,
    Ready,
}

/// One infrared reading, as delivered by the platform.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IrSample {
    /// Whether the sensor bar is in view and `x`/`y` mean anything.
    pub valid: bool,
    /// Cursor position in display coordinates.
    pub x: f32,
    pub y: f32,
    /// Distance from the sensor bar. Not used by the demos.
    pub distance: f32,
    /// Roll in degrees. Not used by the demos.
    pub angle: f32,
}

pub trait Input {
    /// Latches fresh state from every channel. Called once per frame, before
    /// any `probe` or `ir`.
    fn scan(&mut self);

    fn probe(&mut self, channel: Channel) -> ChannelStatus;

    /// The latest infrared reading for `channel`. Only meaningful when `probe`
    /// says the channel is ready.
    fn ir(&mut self, channel: Channel) -> IrSample;
}

/// A cursor position in whole pixels.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

/// Reads the cursor for `channel`, if the channel is ready and its reading is
/// valid. Coordinates are truncated toward zero.
pub fn cursor<I: Input + ?Sized>(input: &mut I, channel: Channel) -> Option<Cursor> {
    match input.probe(channel) {
        ChannelStatus::Ready => (),
        status => {
            log::trace!("channel {} {:?}", channel, status);
            return None;
        }
    }
    let sample = input.ir(channel);
    if !sample.valid {
        return None;
    }
    Some(Cursor {
        x: sample.x as i32,
        y: sample.y as i32,
    })
}
