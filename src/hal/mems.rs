//! MEMS motion sensor interface.
//!
//! Bus access and register programming live in the port; devices only
//! see a pair of signed axis samples and a readiness flag.

/// Two-axis accelerometer.
pub trait Accelerometer {
    /// Whether the underlying transport can be read right now. Reading
    /// an axis while not ready yields meaningless data.
    fn is_ready(&self) -> bool;
    fn read_x(&mut self) -> i8;
    fn read_y(&mut self) -> i8;
}
