//! Byte oriented serial interfaces (UART, USB CDC).
use nb;

/// Serial write half
pub trait Write {
    type Error;

    /// Writes a single byte
    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error>;
}

/// Blocking, formattable view over a serial write half.
///
/// Every byte is blocked on until the device accepts it, so a formatted
/// line is either fully handed to the device or aborted at the first error.
pub struct Stream<'a, S: Write> {
    serial: &'a mut S,
}

impl<'a, S: Write> Stream<'a, S> {
    pub fn new(serial: &'a mut S) -> Self { Self { serial } }
}

impl<'a, S: Write> ufmt::uWrite for Stream<'a, S> {
    type Error = S::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        s.bytes().try_for_each(|b| nb::block!(self.serial.write(b)))
    }
}

/// Formattable view over a serial write half that never waits for long.
///
/// Busy answers from the device are retried, but only `patience` of them
/// are tolerated over the whole lifetime of the stream. Once exhausted,
/// the stream gives up with `WouldBlock` and drops whatever is left.
pub struct TryStream<'a, S: Write> {
    serial: &'a mut S,
    patience: u32,
}

impl<'a, S: Write> TryStream<'a, S> {
    pub fn new(serial: &'a mut S, patience: u32) -> Self { Self { serial, patience } }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), S::Error> {
        loop {
            match self.serial.write(byte) {
                Err(nb::Error::WouldBlock) if self.patience > 0 => self.patience -= 1,
                result => return result,
            }
        }
    }
}

impl<'a, S: Write> ufmt::uWrite for TryStream<'a, S> {
    type Error = nb::Error<S::Error>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        s.bytes().try_for_each(|b| self.write_byte(b))
    }
}
