//! Stop requests.
//!
//! Reset and power buttons arrive as callbacks, potentially in interrupt
//! context. They record a reason here; the frame loop polls it once per frame
//! and stops when it's anything but `Idle`.

use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShutdownReason {
    Idle = 0,
    Reset = 1,
    PowerOff = 2,
    /// The program asked to return to the launcher.
    Exit = 3,
}

impl ShutdownReason {
    fn from_usize(x: usize) -> Self {
        match x {
            1 => ShutdownReason::Reset,
            2 => ShutdownReason::PowerOff,
            3 => ShutdownReason::Exit,
            _ => ShutdownReason::Idle,
        }
    }
}

/// A shutdown reason that can be set from any context.
#[derive(Debug, Default)]
pub struct ShutdownFlag(AtomicUsize);

impl ShutdownFlag {
    pub const fn new() -> Self {
        ShutdownFlag(AtomicUsize::new(ShutdownReason::Idle as usize))
    }

    /// Records `reason`, unless some other reason got there first. Requesting
    /// `Idle` does nothing.
    pub fn request(&self, reason: ShutdownReason) {
        if reason == ShutdownReason::Idle {
            return;
        }
        let prev = self.0.compare_exchange(
            ShutdownReason::Idle as usize,
            reason as usize,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        if prev.is_ok() {
            log::info!("shutdown requested: {:?}", reason);
        }
    }

    pub fn reason(&self) -> ShutdownReason {
        ShutdownReason::from_usize(self.0.load(Ordering::Acquire))
    }

    pub fn is_requested(&self) -> bool {
        self.reason() != ShutdownReason::Idle
    }
}
