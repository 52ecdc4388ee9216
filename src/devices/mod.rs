//! Modules with business logic related to the problem domain, laying on
//! top of abstract drivers. Devices are generic over the HAL interfaces;
//! board specifics are supplied by whoever instantiates them.

pub mod cli;
pub mod heartbeat;
pub mod sampler;
pub mod scheduler;
pub mod supervisor;
pub mod telemetry;
