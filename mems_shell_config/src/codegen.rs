//! Generates the deployment constants module included by the firmware.
use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::Result;
use proc_macro2::TokenStream;
use quote::quote;

use crate::Configuration;

/// Name of the generated file, relative to the output directory.
pub const CONFIGURATION_MODULE: &str = "configuration.rs";

/// Writes `configuration.rs` to `directory`. The configuration is validated
/// first, so an incomplete file never reaches the firmware.
pub fn generate_configuration<P: AsRef<Path>>(
    directory: P,
    configuration: &Configuration,
) -> Result<()> {
    configuration.validate()?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(directory.as_ref().join(CONFIGURATION_MODULE))?;

    file.write_all(format!("{}", configuration_tokens(configuration)).as_bytes())?;
    Ok(())
}

fn configuration_tokens(configuration: &Configuration) -> TokenStream {
    let sampler_period = configuration.sampler.period_ms;
    let report_divider = configuration.sampler.report_divider;
    let counter_wrap = configuration.sampler.counter_wrap;
    let heartbeat_period = configuration.heartbeat.period_ms;
    let poll_interval = configuration.supervisor.poll_interval_ms;

    quote! {
        pub const SAMPLER: crate::devices::sampler::SamplerConfig =
            crate::devices::sampler::SamplerConfig {
                period: crate::hal::time::Milliseconds(#sampler_period),
                report_divider: #report_divider,
                counter_wrap: #counter_wrap,
            };
        pub const HEARTBEAT_PERIOD: crate::hal::time::Milliseconds =
            crate::hal::time::Milliseconds(#heartbeat_period);
        pub const SUPERVISOR_POLL_INTERVAL: crate::hal::time::Milliseconds =
            crate::hal::time::Milliseconds(#poll_interval);
    }
}
