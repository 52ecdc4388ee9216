//! # MEMS Shell Library
//!
//! Accelerometer telemetry and a supervised interactive console for
//! Cortex-M boards, in library form. Board bring-up builds the HAL
//! implementations and hands them to the generic devices defined here.
#![cfg_attr(test, allow(unused_imports))]
#![cfg_attr(target_arch = "arm", no_std)]

extern crate static_assertions;

#[macro_use]
pub mod utilities {
    pub mod iterator;
    #[macro_use]
    mod macros;
}

pub mod config;
pub mod devices;
pub mod drivers;
pub mod error;
pub mod hal;
