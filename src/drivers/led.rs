//! LEDs driven by a single output pin.
use crate::hal::{gpio::OutputPin, led};

/// Single colour LED on one output pin.
///
/// # Example
/// ```
/// # use mems_shell::drivers::led::*;
/// # use mems_shell::hal::led::Toggle;
/// # use mems_shell::hal::doubles::gpio::MockPin;
/// # let pin = MockPin::default();
/// let mut led = MonochromeLed::new(pin, LogicLevel::Direct);
///
/// led.toggle();
/// assert!(led.is_on());
/// # assert!(led.pin().is_high());
/// ```
pub struct MonochromeLed<Pin: OutputPin> {
    pin: Pin,
    is_on: bool,
    logic: LogicLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogicLevel {
    /// Pin high lights the LED
    Direct,
    /// Pin low lights the LED (LED wired to the supply rail)
    Inverted,
}

// Translates on/off into pin levels for a given logic level.
trait LedPin: OutputPin {
    fn off(&mut self, logic: LogicLevel) {
        match logic {
            LogicLevel::Direct => self.set_low(),
            LogicLevel::Inverted => self.set_high(),
        }
    }

    fn on(&mut self, logic: LogicLevel) {
        match logic {
            LogicLevel::Direct => self.set_high(),
            LogicLevel::Inverted => self.set_low(),
        }
    }
}

impl<Pin: OutputPin> LedPin for Pin {}

impl<Pin: OutputPin> MonochromeLed<Pin> {
    /// Takes ownership of the pin and drives it to the "off" level.
    pub fn new(mut pin: Pin, logic: LogicLevel) -> Self {
        LedPin::off(&mut pin, logic);
        Self { pin, is_on: false, logic }
    }

    pub fn is_on(&self) -> bool { self.is_on }

    pub fn pin(&self) -> &Pin { &self.pin }
}

impl<Pin: OutputPin> led::Toggle for MonochromeLed<Pin> {
    fn on(&mut self) {
        if !self.is_on {
            LedPin::on(&mut self.pin, self.logic);
        }
        self.is_on = true;
    }

    fn off(&mut self) {
        if self.is_on {
            LedPin::off(&mut self.pin, self.logic);
        }
        self.is_on = false;
    }

    fn toggle(&mut self) {
        if self.is_on {
            led::Toggle::off(self);
        } else {
            led::Toggle::on(self);
        }
    }
}
