//! Millisecond time base.
//!
//! The SysTick exception increments a shared millisecond counter; the
//! rest of the firmware reads it through [`time::Now`] and compares the
//! resulting [`Tick`]s with wrapping arithmetic.
use crate::hal::time::{self, Milliseconds};
use core::sync::atomic::{AtomicU32, Ordering};

/// Opaque wrapper around the millisecond counter at certain point in time
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    millis: u32,
}

impl time::Instant for Tick {}

/// Tick subtraction to obtain a time period
impl core::ops::Sub for Tick {
    type Output = Milliseconds;

    fn sub(self, rhs: Self) -> Self::Output { Milliseconds(self.millis.wrapping_sub(rhs.millis)) }
}

/// Addition between any Millisecond-convertible type and the current tick.
impl<T: Into<Milliseconds>> core::ops::Add<T> for Tick {
    type Output = Self;

    fn add(self, rhs: T) -> Self { Self { millis: self.millis.wrapping_add(rhs.into().0) } }
}

/// Free running millisecond counter.
pub struct TickCounter {
    millis: AtomicU32,
}

/// Counter advanced by the SysTick exception.
pub static SYSTEM_TICKS: TickCounter = TickCounter::new();

impl TickCounter {
    pub const fn new() -> Self { Self { millis: AtomicU32::new(0) } }

    /// Advances the counter by one millisecond. Single writer: the
    /// SysTick exception handler.
    pub fn increment(&self) {
        let next = self.millis.load(Ordering::Relaxed).wrapping_add(1);
        self.millis.store(next, Ordering::Relaxed);
    }
}

impl Default for TickCounter {
    fn default() -> Self { Self::new() }
}

impl time::Now for &TickCounter {
    type I = Tick;
    fn now(&self) -> Tick { Tick { millis: self.millis.load(Ordering::Relaxed) } }
}

#[cfg(target_arch = "arm")]
pub use self::cortex::SysTick;

#[cfg(target_arch = "arm")]
mod cortex {
    use super::{TickCounter, SYSTEM_TICKS};
    use crate::{error::Error, hal::time::Hertz};
    use cortex_m::peripheral::{syst::SystClkSource, SYST};

    const MAX_RELOAD: u32 = 0x00FF_FFFF;

    /// Owner of the SysTick peripheral, configured for a 1 kHz interrupt.
    pub struct SysTick {
        _syst: SYST,
    }

    impl SysTick {
        pub fn start(mut syst: SYST, sysclk: Hertz) -> Result<Self, Error> {
            let reload = (sysclk.0 / 1_000).saturating_sub(1);
            if reload == 0 || reload > MAX_RELOAD {
                return Err(Error::ConfigurationError("System clock out of SysTick range"));
            }
            syst.set_clock_source(SystClkSource::Core);
            syst.set_reload(reload);
            syst.clear_current();
            syst.enable_interrupt();
            syst.enable_counter();
            Ok(Self { _syst: syst })
        }

        /// Must be called from the `SysTick` exception handler.
        pub fn on_interrupt() { SYSTEM_TICKS.increment(); }

        pub fn counter(&self) -> &'static TickCounter { &SYSTEM_TICKS }
    }
}
