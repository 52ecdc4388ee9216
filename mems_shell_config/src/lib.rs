//! This sub-crate contains the deployment configuration model for
//! `mems_shell`.
//!
//! NOTE: This code is not included anywhere from the firmware itself! This
//! is a dependency of the firmware **build script**. The build script uses
//! it to read a RON configuration file and generate the constants the
//! firmware includes (task periods, sampler report divider, etc).

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod codegen;

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Configuration {
    pub sampler: SamplerConfiguration,
    pub heartbeat: HeartbeatConfiguration,
    pub supervisor: SupervisorConfiguration,
}

/// Accelerometer sampling task.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SamplerConfiguration {
    pub period_ms: u32,
    /// Number of sampled ticks between activity blinks and diagnostic lines.
    pub report_divider: u32,
    /// Value at which the sampler's tick counter returns to zero.
    pub counter_wrap: u32,
}

impl Default for SamplerConfiguration {
    fn default() -> Self { Self { period_ms: 100, report_divider: 10, counter_wrap: 1_000_000 } }
}

/// "System alive" blinker.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeartbeatConfiguration {
    pub period_ms: u32,
}

impl Default for HeartbeatConfiguration {
    fn default() -> Self { Self { period_ms: 500 } }
}

/// Console session supervisor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupervisorConfiguration {
    pub poll_interval_ms: u32,
}

impl Default for SupervisorConfiguration {
    fn default() -> Self { Self { poll_interval_ms: 500 } }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationProblem {
    SamplerPeriod,
    ReportDivider,
    CounterWrap,
    CounterWrapNotMultipleOfDivider,
    HeartbeatPeriod,
    SupervisorPollInterval,
}

impl Display for ConfigurationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationProblem::SamplerPeriod => write!(f, "Sampler period must be non-zero"),
            ConfigurationProblem::ReportDivider => write!(f, "Report divider must be non-zero"),
            ConfigurationProblem::CounterWrap => write!(f, "Counter wrap must be non-zero"),
            ConfigurationProblem::CounterWrapNotMultipleOfDivider => {
                write!(f, "Counter wrap must be a multiple of the report divider")
            }
            ConfigurationProblem::HeartbeatPeriod => write!(f, "Heartbeat period must be non-zero"),
            ConfigurationProblem::SupervisorPollInterval => {
                write!(f, "Supervisor poll interval must be non-zero")
            }
        }
    }
}

impl Configuration {
    pub fn complete(&self) -> bool { self.problems().next().is_none() }

    pub fn problems(&self) -> impl Iterator<Item = ConfigurationProblem> {
        let sampler = &self.sampler;
        #[rustfmt::skip]
        let checks = [
            (sampler.period_ms == 0).then_some(ConfigurationProblem::SamplerPeriod),
            (sampler.report_divider == 0).then_some(ConfigurationProblem::ReportDivider),
            (sampler.counter_wrap == 0).then_some(ConfigurationProblem::CounterWrap),

            // Report cadence must survive the counter rolling over.
            (sampler.report_divider != 0 && sampler.counter_wrap % sampler.report_divider != 0)
                .then_some(ConfigurationProblem::CounterWrapNotMultipleOfDivider),

            (self.heartbeat.period_ms == 0).then_some(ConfigurationProblem::HeartbeatPeriod),
            (self.supervisor.poll_interval_ms == 0)
                .then_some(ConfigurationProblem::SupervisorPollInterval),
        ];
        checks.into_iter().flatten()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match self.problems().next() {
            None => Ok(()),
            Some(problem) => Err(anyhow::anyhow!("Invalid configuration: {}", problem)),
        }
    }
}
