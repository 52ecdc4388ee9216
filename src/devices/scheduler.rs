//! Cooperative periodic scheduler.
//!
//! Each task runs to completion on its own fixed period; the only
//! suspension point is between task bodies. Deadlines advance by whole
//! periods from the previous deadline rather than from the time the task
//! actually ran, so execution jitter does not accumulate.
use crate::{
    error::Error,
    hal::time::{Instant, Milliseconds, Now},
    utilities::iterator::Unique,
};
use core::sync::atomic::{AtomicU32, Ordering};

/// A unit of periodic work.
pub trait Task {
    fn run(&mut self);
}

/// Release time bookkeeping for one periodic task.
#[derive(Copy, Clone, Debug)]
pub struct Periodic<I: Instant> {
    period: Milliseconds,
    release: Option<I>,
}

impl<I: Instant> Periodic<I> {
    pub fn new(period: Milliseconds) -> Self { Self { period, release: None } }

    /// Whether the task is due at `now`. Consumes the release if so.
    ///
    /// A task is due the first time it is asked. After that, each release
    /// is one period after the previous one; a task that falls a full
    /// period or more behind is resynchronised to `now` and skips the
    /// missed releases.
    pub fn is_due(&mut self, now: I) -> bool {
        let release = match self.release {
            None => {
                self.release = Some(now);
                return true;
            }
            Some(release) => release,
        };

        if now - release < self.period {
            return false;
        }

        let next = release + self.period;
        self.release = Some(if now - next >= self.period { now } else { next });
        true
    }

    pub fn period(&self) -> Milliseconds { self.period }
}

/// Identity and activity of a scheduled task, readable from any context.
///
/// Records are `const` constructible so they can live in statics shared
/// between the scheduler and the console.
pub struct TaskRecord {
    name: &'static str,
    period: Milliseconds,
    runs: AtomicU32,
}

impl TaskRecord {
    pub const fn new(name: &'static str, period: Milliseconds) -> Self {
        Self { name, period, runs: AtomicU32::new(0) }
    }

    pub fn name(&self) -> &'static str { self.name }

    pub fn period(&self) -> Milliseconds { self.period }

    /// Completed runs, wrapping at `u32::MAX`.
    pub fn runs(&self) -> u32 { self.runs.load(Ordering::Relaxed) }

    // Single writer: the scheduler owning the task.
    fn record_run(&self) {
        let runs = self.runs.load(Ordering::Relaxed).wrapping_add(1);
        self.runs.store(runs, Ordering::Relaxed);
    }
}

struct Slot<'a, I: Instant> {
    task: &'a mut dyn Task,
    record: &'a TaskRecord,
    timing: Periodic<I>,
}

pub struct Scheduler<'a, C: Now, const N: usize> {
    clock: C,
    slots: [Slot<'a, C::I>; N],
}

impl<'a, C: Now, const N: usize> Scheduler<'a, C, N> {
    pub fn new(clock: C, tasks: [(&'a mut dyn Task, &'a TaskRecord); N]) -> Result<Self, Error> {
        if tasks.iter().any(|(_, record)| record.period.0 == 0) {
            return Err(Error::ConfigurationError("Task periods must be non-zero"));
        }
        if !tasks.iter().map(|(_, record)| record.name).all_unique() {
            return Err(Error::ConfigurationError("Task names must be unique"));
        }
        let slots =
            tasks.map(|(task, record)| Slot { task, record, timing: Periodic::new(record.period) });
        Ok(Self { clock, slots })
    }

    /// Runs every task that is due, in registration order. Returns how
    /// many ran.
    pub fn step(&mut self) -> usize {
        let now = self.clock.now();
        let mut ran = 0;
        for slot in self.slots.iter_mut() {
            if slot.timing.is_due(now) {
                slot.task.run();
                slot.record.record_run();
                ran += 1;
            }
        }
        ran
    }

    pub fn run(&mut self) -> ! {
        log_info!("Scheduler running {=usize} tasks", N);
        loop {
            if self.step() == 0 {
                idle();
            }
        }
    }
}

#[cfg(target_arch = "arm")]
fn idle() { cortex_m::asm::wfi(); }

#[cfg(not(target_arch = "arm"))]
fn idle() { core::hint::spin_loop(); }
