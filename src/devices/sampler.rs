//! Periodic accelerometer sampler.
//!
//! Every period the sampler reads both raw axes, smooths them with a
//! moving average over the last [`HISTORY_DEPTH`] samples and publishes
//! the filtered pair to the shared [`Telemetry`] cell. Every
//! `report_divider` sampled ticks it also toggles an activity indicator
//! and, when debug output is enabled, writes the filtered pair to a
//! diagnostic stream.
use crate::{
    devices::{
        scheduler::Task,
        telemetry::{Reading, Telemetry},
    },
    error::Error,
    hal::{led, mems::Accelerometer, serial, time::Milliseconds},
};
use ufmt::uwrite;

/// Number of raw samples averaged per axis.
pub const HISTORY_DEPTH: usize = 4;

/// Busy answers tolerated from the diagnostic stream per line before the
/// line is dropped.
pub const DIAGNOSTIC_PATIENCE: u32 = 1_000;

/// Fixed depth sample history with a running sum.
///
/// Starts zero filled, so the first `N - 1` means are taken against
/// zeros. The mean truncates toward zero. A zero depth history fails to
/// compile.
///
/// # Example
/// ```
/// # use mems_shell::devices::sampler::History;
/// let mut history = History::<4>::new();
/// history.push(8);
/// assert_eq!(2, history.mean());
/// history.push(-20);
/// assert_eq!(-3, history.mean());
/// assert_eq!(vec![-20, 8, 0, 0], history.iter().collect::<Vec<_>>());
/// ```
///
/// ```compile_fail
/// # use mems_shell::devices::sampler::History;
/// let history = History::<0>::new();
/// ```
#[derive(Clone, Debug)]
pub struct History<const N: usize> {
    samples: [i16; N],
    newest: usize,
    sum: i32,
}

impl<const N: usize> History<N> {
    const NON_EMPTY: () = assert!(N > 0, "History depth must be non-zero");

    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self { samples: [0; N], newest: 0, sum: 0 }
    }

    /// Evicts the oldest sample and stores `sample` as the newest.
    pub fn push(&mut self, sample: i16) {
        let oldest = (self.newest + 1) % N;
        self.sum = self.sum - i32::from(self.samples[oldest]) + i32::from(sample);
        self.samples[oldest] = sample;
        self.newest = oldest;
    }

    pub fn mean(&self) -> i16 { (self.sum / N as i32) as i16 }

    /// Samples from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = i16> + '_ {
        (0..N).map(move |age| self.samples[(self.newest + N - age) % N])
    }
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self { Self::new() }
}

/// Sampler timing and reporting cadence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Time between ticks.
    pub period: Milliseconds,
    /// Sampled ticks between two reports.
    pub report_divider: u32,
    /// Bound at which the tick counter returns to zero.
    pub counter_wrap: u32,
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.period.0 == 0 {
            Err(Error::ConfigurationError("Sampler period must be non-zero"))
        } else if self.report_divider == 0 {
            Err(Error::ConfigurationError("Report divider must be non-zero"))
        } else if self.counter_wrap == 0 || self.counter_wrap % self.report_divider != 0 {
            Err(Error::ConfigurationError("Counter wrap must be a multiple of the report divider"))
        } else {
            Ok(())
        }
    }
}

pub struct Sampler<'a, A, I, O>
where
    A: Accelerometer,
    I: led::Toggle,
    O: serial::Write,
{
    sensor: A,
    indicator: I,
    output: O,
    telemetry: &'a Telemetry,
    config: SamplerConfig,
    x: History<HISTORY_DEPTH>,
    y: History<HISTORY_DEPTH>,
    counter: u32,
}

impl<'a, A, I, O> Sampler<'a, A, I, O>
where
    A: Accelerometer,
    I: led::Toggle,
    O: serial::Write,
{
    pub fn new(
        sensor: A,
        indicator: I,
        output: O,
        telemetry: &'a Telemetry,
        config: SamplerConfig,
    ) -> Result<Self, Error> {
        config.validate()?;
        log_info!("Sampler started, reporting every {=u32} ticks", config.report_divider);
        Ok(Self {
            sensor,
            indicator,
            output,
            telemetry,
            config,
            x: History::new(),
            y: History::new(),
            counter: 0,
        })
    }

    /// Samples both axes once and publishes the filtered pair.
    ///
    /// Does nothing (and returns `None`) while the sensor is not ready.
    pub fn tick(&mut self) -> Option<Reading> {
        if !self.sensor.is_ready() {
            log_trace!("Sensor not ready, skipping tick");
            return None;
        }

        self.x.push(self.sensor.read_x().into());
        self.y.push(self.sensor.read_y().into());
        let reading = Reading::new(self.x.mean(), self.y.mean());
        self.telemetry.publish(reading);

        self.counter += 1;
        if self.counter % self.config.report_divider == 0 {
            self.report(reading);
        }
        if self.counter >= self.config.counter_wrap {
            self.counter = 0;
        }
        Some(reading)
    }

    fn report(&mut self, reading: Reading) {
        self.indicator.toggle();
        if self.telemetry.debug() {
            let mut stream = serial::TryStream::new(&mut self.output, DIAGNOSTIC_PATIENCE);
            if uwrite!(stream, "X:{}, Y:{}\r\n", reading.x, reading.y).is_err() {
                log_trace!("Diagnostic stream busy, line dropped");
            }
        }
    }

    pub fn period(&self) -> Milliseconds { self.config.period }

    pub fn counter(&self) -> u32 { self.counter }

    pub fn sensor_mut(&mut self) -> &mut A { &mut self.sensor }

    pub fn indicator(&self) -> &I { &self.indicator }

    pub fn output(&self) -> &O { &self.output }

    pub fn output_mut(&mut self) -> &mut O { &mut self.output }
}

impl<'a, A, I, O> Task for Sampler<'a, A, I, O>
where
    A: Accelerometer,
    I: led::Toggle,
    O: serial::Write,
{
    fn run(&mut self) { self.tick(); }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        drivers::led::{LogicLevel, MonochromeLed},
        hal::doubles::{gpio::MockPin, mems::FakeAccelerometer, serial::MockSerial},
    };

    type TestSampler<'a> = Sampler<'a, FakeAccelerometer, MonochromeLed<MockPin>, MockSerial>;

    const CONFIG: SamplerConfig =
        SamplerConfig { period: Milliseconds(100), report_divider: 10, counter_wrap: 1_000_000 };

    fn sampler<'a>(telemetry: &'a Telemetry, config: SamplerConfig) -> TestSampler<'a> {
        Sampler::new(
            FakeAccelerometer::default(),
            MonochromeLed::new(MockPin::default(), LogicLevel::Direct),
            MockSerial::default(),
            telemetry,
            config,
        )
        .unwrap()
    }

    #[test]
    fn history_is_zero_filled_and_evicts_oldest() {
        // Given
        let mut history = History::<HISTORY_DEPTH>::new();
        assert_eq!(vec![0, 0, 0, 0], history.iter().collect::<Vec<_>>());

        // When
        [1, 2, 3, 4, 5].iter().for_each(|s| history.push(*s));

        // Then
        assert_eq!(vec![5, 4, 3, 2], history.iter().collect::<Vec<_>>());
        assert_eq!(3, history.mean());
    }

    #[test]
    fn history_mean_truncates_toward_zero() {
        let mut history = History::<HISTORY_DEPTH>::new();
        [-1, -1, -1, 0].iter().for_each(|s| history.push(*s));
        assert_eq!(0, history.mean());

        [-7, -7, -7, -6].iter().for_each(|s| history.push(*s));
        assert_eq!(-6, history.mean());

        [i8::MIN as i16; 4].iter().for_each(|s| history.push(*s));
        assert_eq!(-128, history.mean());
    }

    #[test]
    fn published_value_is_the_mean_of_the_last_four_samples() {
        // Given
        let telemetry = Telemetry::new();
        let mut sampler = sampler(&telemetry, CONFIG);
        let raw: [(i8, i8); 7] = [(40, -40), (8, 0), (-13, 3), (100, 1), (-128, 127), (6, 6), (-1, -9)];
        sampler.sensor_mut().push_samples(raw);

        for (tick, _) in raw.iter().enumerate() {
            // When
            let published = sampler.tick().unwrap();

            // Then
            let window = raw[..=tick].iter().rev().take(HISTORY_DEPTH);
            let (sum_x, sum_y) =
                window.fold((0i32, 0i32), |(sx, sy), (x, y)| (sx + *x as i32, sy + *y as i32));
            let expected = Reading::new((sum_x / 4) as i16, (sum_y / 4) as i16);
            assert_eq!(expected, published);
            assert_eq!(expected, telemetry.reading());
        }
    }

    #[test]
    fn first_ticks_average_against_zeros() {
        // Given
        let telemetry = Telemetry::new();
        let mut sampler = sampler(&telemetry, CONFIG);
        sampler.sensor_mut().push_samples([(12, -12), (12, -12)]);

        // When
        sampler.tick();

        // Then
        assert_eq!(Reading::new(3, -3), telemetry.reading());

        // When
        sampler.tick();

        // Then
        assert_eq!(Reading::new(6, -6), telemetry.reading());
    }

    #[test]
    fn not_ready_tick_changes_nothing() {
        // Given
        let telemetry = Telemetry::new();
        let mut sampler = sampler(&telemetry, CONFIG);
        sampler.sensor_mut().push_samples([(20, 20), (60, 60)]);
        sampler.tick();
        let before = telemetry.reading();
        let reads = sampler.sensor_mut().reads;

        // When
        sampler.sensor_mut().ready = false;
        let result = sampler.tick();

        // Then
        assert_eq!(None, result);
        assert_eq!(before, telemetry.reading());
        assert_eq!(reads, sampler.sensor_mut().reads);
        assert_eq!(1, sampler.counter());

        // When the sensor recovers, the history resumes where it left off
        sampler.sensor_mut().ready = true;
        sampler.tick();

        // Then
        assert_eq!(Reading::new(20, 20), telemetry.reading());
    }

    #[test]
    fn indicator_toggles_every_report_divider_ticks() {
        // Given
        let telemetry = Telemetry::new();
        let mut sampler = sampler(&telemetry, CONFIG);

        // When
        (0..9).for_each(|_| {
            sampler.tick();
        });

        // Then
        assert!(!sampler.indicator().is_on());

        // When
        sampler.tick();

        // Then
        assert!(sampler.indicator().is_on());

        // When
        (0..10).for_each(|_| {
            sampler.tick();
        });

        // Then
        assert!(!sampler.indicator().is_on());
        assert!(sampler.output().written.is_empty());
    }

    #[test]
    fn diagnostic_line_is_written_only_with_debug_enabled() {
        // Given
        let telemetry = Telemetry::new();
        let config = SamplerConfig { report_divider: 5, ..CONFIG };
        let mut sampler = sampler(&telemetry, config);
        sampler.sensor_mut().push_samples([(-40, 80); 10]);
        (0..5).for_each(|_| {
            sampler.tick();
        });
        assert!(sampler.output().written.is_empty());

        // When
        telemetry.set_debug(true);
        (0..5).for_each(|_| {
            sampler.tick();
        });

        // Then
        assert_eq!(vec!["X:-40, Y:80"], sampler.output().lines());
    }

    #[test]
    fn counter_returns_to_zero_at_the_wrap_bound() {
        // Given
        let telemetry = Telemetry::new();
        let config = SamplerConfig { report_divider: 2, counter_wrap: 6, ..CONFIG };
        let mut sampler = sampler(&telemetry, config);
        telemetry.set_debug(true);

        // When
        (0..6).for_each(|_| {
            sampler.tick();
        });

        // Then
        assert_eq!(0, sampler.counter());
        assert_eq!(3, sampler.output().lines().len());

        // When
        sampler.tick();

        // Then
        assert_eq!(1, sampler.counter());
        assert_eq!(3, sampler.output().lines().len());
    }

    #[test]
    fn inconsistent_configurations_are_rejected() {
        let telemetry = Telemetry::new();
        let bad = [
            SamplerConfig { period: Milliseconds(0), ..CONFIG },
            SamplerConfig { report_divider: 0, ..CONFIG },
            SamplerConfig { counter_wrap: 25, ..CONFIG },
        ];
        for config in bad {
            assert!(matches!(
                Sampler::new(
                    FakeAccelerometer::default(),
                    MonochromeLed::new(MockPin::default(), LogicLevel::Direct),
                    MockSerial::default(),
                    &telemetry,
                    config,
                ),
                Err(Error::ConfigurationError(_))
            ));
        }
    }

    #[test]
    fn sampler_runs_as_a_scheduled_task() {
        // Given
        let telemetry = Telemetry::new();
        let mut sampler = sampler(&telemetry, CONFIG);
        sampler.sensor_mut().push_samples([(4, 8)]);

        // When
        Task::run(&mut sampler);

        // Then
        assert_eq!(Reading::new(1, 2), telemetry.reading());
    }

    #[test]
    fn single_sample_history_tracks_the_latest_sample() {
        // Given
        let mut history = History::<1>::new();

        // When
        history.push(-9);
        history.push(17);

        // Then
        assert_eq!(17, history.mean());
        assert_eq!(vec![17], history.iter().collect::<Vec<_>>());
    }

    #[test]
    fn stalled_diagnostic_stream_drops_the_line_without_blocking() {
        // Given
        let telemetry = Telemetry::new();
        let config = SamplerConfig { report_divider: 1, ..CONFIG };
        let mut sampler = sampler(&telemetry, config);
        sampler.sensor_mut().push_samples([(8, 8), (8, 8)]);
        sampler.output_mut().stalled = true;
        telemetry.set_debug(true);

        // When
        let reading = sampler.tick();

        // Then
        assert_eq!(Some(Reading::new(2, 2)), reading);
        assert!(sampler.indicator().is_on());
        assert!(sampler.output().written.is_empty());
        assert_eq!(DIAGNOSTIC_PATIENCE as usize + 1, sampler.output().refusals);

        // When the host comes back, the next line goes through
        sampler.output_mut().stalled = false;
        sampler.tick();

        // Then
        assert_eq!(vec!["X:4, Y:4"], sampler.output().lines());
    }
}
