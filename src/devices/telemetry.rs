//! Shared telemetry state.
//!
//! The single cell through which the sampler, the console commands and
//! anything else observe the latest filtered accelerometer reading and the
//! debug flag. It is written and read from independently scheduled
//! contexts, so every access goes through an atomic:
//!
//! * The filtered pair is packed into one 32-bit word (X in the upper half,
//!   Y in the lower half) and published with a single store. A reader loads
//!   the word once and therefore always sees a pair from the same tick.
//! * The debug flag lives in its own atomic boolean.
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Filtered (moving average) accelerometer reading.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Reading {
    pub x: i16,
    pub y: i16,
}

impl Reading {
    pub const fn new(x: i16, y: i16) -> Self { Self { x, y } }

    const fn pack(self) -> u32 { ((self.x as u16 as u32) << 16) | (self.y as u16 as u32) }

    const fn unpack(word: u32) -> Self { Self { x: (word >> 16) as u16 as i16, y: word as u16 as i16 } }
}

/// Latest reading and debug flag. `const` constructible, so boards keep
/// one in a `static` shared by every context.
pub struct Telemetry {
    reading: AtomicU32,
    debug: AtomicBool,
}

impl Telemetry {
    /// Zero reading, debug disabled.
    pub const fn new() -> Self {
        Self { reading: AtomicU32::new(Reading::new(0, 0).pack()), debug: AtomicBool::new(false) }
    }

    /// Replaces the latest reading. Both axes become visible together.
    pub fn publish(&self, reading: Reading) {
        self.reading.store(reading.pack(), Ordering::Release);
    }

    /// Latest complete reading.
    pub fn reading(&self) -> Reading { Reading::unpack(self.reading.load(Ordering::Acquire)) }

    pub fn set_debug(&self, enabled: bool) { self.debug.store(enabled, Ordering::Release); }

    pub fn debug(&self) -> bool { self.debug.load(Ordering::Acquire) }
}

impl Default for Telemetry {
    fn default() -> Self { Self::new() }
}
