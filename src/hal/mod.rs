//! Hardware Abstraction Layer, containing interfaces
//! for low level drivers and the board capabilities the
//! devices consume.

pub mod gpio;
pub mod led;
pub mod link;
pub mod mems;
pub mod serial;
pub mod time;

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod doubles;
