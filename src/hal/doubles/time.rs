use crate::hal::time::{self, Milliseconds};
use core::cell::Cell;

/// Millisecond instant with a deliberately small wrap, so tests can
/// cross a counter rollover without running for 49 days.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MockInstant(pub u32);

pub const MOCK_WRAP: u32 = 1 << 16;

impl time::Instant for MockInstant {}

impl core::ops::Sub for MockInstant {
    type Output = Milliseconds;
    fn sub(self, rhs: Self) -> Milliseconds {
        Milliseconds(self.0.wrapping_sub(rhs.0) % MOCK_WRAP)
    }
}

impl core::ops::Add<Milliseconds> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Milliseconds) -> Self { MockInstant((self.0 + rhs.0) % MOCK_WRAP) }
}

/// Clock advanced by hand.
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new(start: u32) -> Self { Self { now: Cell::new(start % MOCK_WRAP) } }
    pub fn advance(&self, by: Milliseconds) { self.now.set((self.now.get() + by.0) % MOCK_WRAP) }
}

impl time::Now for MockClock {
    type I = MockInstant;
    fn now(&self) -> MockInstant { MockInstant(self.now.get()) }
}

impl time::Now for &MockClock {
    type I = MockInstant;
    fn now(&self) -> MockInstant { MockInstant(self.now.get()) }
}
