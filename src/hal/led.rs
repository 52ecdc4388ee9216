//! LED interfaces
//!
//! The firmware only ever switches LEDs between two states, so a
//! single interface covers both the heartbeat and the sampler's
//! activity indicator.

/// Interface to a LED's direct on/off/toggle operations.
pub trait Toggle {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);
}
