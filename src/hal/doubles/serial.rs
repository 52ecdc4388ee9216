use crate::hal::serial;
use std::{string::String, vec::Vec};

/// Serial sink that records everything written to it. A stalled sink
/// answers `WouldBlock` forever, like a CDC port with no host attached.
#[derive(Clone, Debug, Default)]
pub struct MockSerial {
    pub written: Vec<u8>,
    pub stalled: bool,
    pub refusals: usize,
}

impl MockSerial {
    /// Everything written so far, as text.
    pub fn text(&self) -> String { String::from_utf8_lossy(&self.written).into_owned() }

    /// Written text split on the `\r\n` line terminator, without empty tail.
    pub fn lines(&self) -> Vec<String> {
        self.text().split_terminator("\r\n").map(String::from).collect()
    }

    pub fn clear(&mut self) { self.written.clear(); }
}

impl serial::Write for MockSerial {
    type Error = ();

    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if self.stalled {
            self.refusals += 1;
            return Err(nb::Error::WouldBlock);
        }
        self.written.push(byte);
        Ok(())
    }
}
