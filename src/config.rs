//! Deployment constants.
//!
//! Generated by the build script from the RON file named by the
//! `MEMS_SHELL_CONFIG` environment variable (the stm32f407 discovery
//! sample configuration by default).
use static_assertions::const_assert;

include!(concat!(env!("OUT_DIR"), "/configuration.rs"));

const_assert!(SAMPLER.period.0 > 0);
const_assert!(SAMPLER.report_divider > 0);
const_assert!(SAMPLER.counter_wrap % SAMPLER.report_divider == 0);
const_assert!(HEARTBEAT_PERIOD.0 > 0);
const_assert!(SUPERVISOR_POLL_INTERVAL.0 > 0);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generated_sampler_configuration_is_accepted() {
        assert!(SAMPLER.validate().is_ok());
    }
}
