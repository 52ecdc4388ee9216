//! Test doubles for the HAL interfaces. Host only.
pub mod gpio;
pub mod link;
pub mod mems;
pub mod serial;
pub mod time;
