//! # Simple GPIO interface
//!
//! Interface to output pins, implemented by the board port for
//! whichever pins drive the status LEDs.

/// Interface to a writable pin.
pub trait OutputPin {
    fn set_low(&mut self);
    fn set_high(&mut self);
}
