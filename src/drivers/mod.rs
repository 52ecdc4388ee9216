//! Driver implementations over the HAL interfaces. Peripheral
//! specific parts (the SysTick peripheral) are only compiled for
//! Cortex-M targets.

pub mod led;
pub mod systick;
