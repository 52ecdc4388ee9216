//! "System is alive" blinker.
use crate::{devices::scheduler::Task, hal::led};

/// Toggles a status LED once per run, independently of the sampler's
/// activity indicator.
pub struct Heartbeat<L: led::Toggle> {
    led: L,
}

impl<L: led::Toggle> Heartbeat<L> {
    pub fn new(led: L) -> Self { Self { led } }

    pub fn led(&self) -> &L { &self.led }
}

impl<L: led::Toggle> Task for Heartbeat<L> {
    fn run(&mut self) { self.led.toggle(); }
}
