//! Sound effects.
//!
//! The platform mixer has a fixed set of voices. Effects are fire-and-forget:
//! we grab whichever voice is idle, start a tone on it, and never look back.
//! If every voice is busy the effect is simply dropped.

/// Handle to one mixer voice.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Voice(pub u8);

/// Loudest setting for either channel.
pub const FULL_VOLUME: u8 = 255;

/// What to play on a voice: the effect sample at `pitch` Hz.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tone {
    pub pitch: u32,
    pub volume_left: u8,
    pub volume_right: u8,
}

impl Tone {
    pub const fn full(pitch: u32) -> Self {
        Tone {
            pitch,
            volume_left: FULL_VOLUME,
            volume_right: FULL_VOLUME,
        }
    }
}

pub trait Audio {
    /// Finds a voice that isn't playing anything, if there is one.
    fn first_unused_voice(&mut self) -> Option<Voice>;

    /// Starts `tone` on `voice`, replacing whatever it was doing. Must not
    /// block.
    fn set_voice(&mut self, voice: Voice, tone: Tone);

    /// Called once per displayed frame. Mixers that model playback time can
    /// use this to retire finished voices.
    fn frame(&mut self) {}
}

/// Plays the effect at `pitch` on any free voice at full volume.
///
/// Returns `false` if the effect was dropped because every voice was busy.
/// That's not an error; there's nothing useful a caller could do about it.
pub fn play_event<A: Audio + ?Sized>(audio: &mut A, pitch: u32) -> bool {
    match audio.first_unused_voice() {
        Some(voice) => {
            log::trace!("tone {} Hz on voice {}", pitch, voice.0);
            audio.set_voice(voice, Tone::full(pitch));
            true
        }
        None => {
            log::debug!("no free voice, dropping {} Hz tone", pitch);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct OneVoice {
        busy: bool,
        played: Vec<(Voice, Tone)>,
    }

    impl Audio for OneVoice {
        fn first_unused_voice(&mut self) -> Option<Voice> {
            if self.busy {
                None
            } else {
                Some(Voice(0))
            }
        }

        fn set_voice(&mut self, voice: Voice, tone: Tone) {
            self.busy = true;
            self.played.push((voice, tone));
        }
    }

    #[test]
    fn plays_at_full_volume() {
        let mut audio = OneVoice::default();
        assert!(play_event(&mut audio, 36000));
        assert_eq!(audio.played, vec![(Voice(0), Tone::full(36000))]);
        assert_eq!(audio.played[0].1.volume_left, 255);
    }

    #[test]
    fn drops_when_exhausted() {
        let mut audio = OneVoice::default();
        assert!(play_event(&mut audio, 36000));
        assert!(!play_event(&mut audio, 24000));
        assert_eq!(audio.played.len(), 1);
    }
}
