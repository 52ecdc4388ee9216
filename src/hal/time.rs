//! Time units and clock interfaces.
use core::ops::{Add, Sub};

/// Point in time read from a free running, wrapping counter.
///
/// `later - earlier` yields the elapsed milliseconds, correct across a
/// counter rollover as long as less than one full counter period
/// separates the two. Adding milliseconds to an instant yields another
/// instant, wrapping the same way.
pub trait Instant
where
    Self: Copy + Clone,
    Self: Sub<Output = Milliseconds>,
    Self: Add<Milliseconds, Output = Self>,
{
}

/// Source of the current instant.
pub trait Now {
    type I: Instant;
    fn now(&self) -> Self::I;
}

#[derive(Clone, Copy, Debug, PartialOrd, Ord, PartialEq, Eq, Default)]
pub struct Milliseconds(pub u32);

#[derive(Clone, Copy, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct Seconds(pub u32);

/// Clock frequency.
#[derive(Clone, Copy, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct Hertz(pub u32);

impl From<Seconds> for Milliseconds {
    fn from(s: Seconds) -> Self { Milliseconds(s.0 * 1_000) }
}

impl Add for Milliseconds {
    type Output = Milliseconds;
    fn add(self, rhs: Self) -> Self::Output { Milliseconds(self.0.wrapping_add(rhs.0)) }
}
