use crate::hal::mems::Accelerometer;
use std::collections::VecDeque;

/// Accelerometer replaying scripted samples.
///
/// Each axis read pops the next scripted value for that axis (zero once
/// the script runs out). Reads are counted so tests can verify the
/// readiness guard never touches the bus.
#[derive(Clone, Debug)]
pub struct FakeAccelerometer {
    pub x: VecDeque<i8>,
    pub y: VecDeque<i8>,
    pub ready: bool,
    pub reads: usize,
}

impl Default for FakeAccelerometer {
    fn default() -> Self { Self { x: VecDeque::new(), y: VecDeque::new(), ready: true, reads: 0 } }
}

impl FakeAccelerometer {
    pub fn push_samples<I: IntoIterator<Item = (i8, i8)>>(&mut self, samples: I) {
        for (x, y) in samples {
            self.x.push_back(x);
            self.y.push_back(y);
        }
    }
}

impl Accelerometer for FakeAccelerometer {
    fn is_ready(&self) -> bool { self.ready }

    fn read_x(&mut self) -> i8 {
        self.reads += 1;
        self.x.pop_front().unwrap_or_default()
    }

    fn read_y(&mut self) -> i8 {
        self.reads += 1;
        self.y.pop_front().unwrap_or_default()
    }
}
