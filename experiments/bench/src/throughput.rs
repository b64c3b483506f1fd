use std::{fmt, time::Duration};

/// Frame count and summed inference time of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    frames: u64,
    total: Duration,
}

impl Throughput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.total += elapsed;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Frames per second over the summed inference time. `None` when no
    /// frame was processed or no time was measured.
    pub fn average_fps(&self) -> Option<f64> {
        let seconds = self.total.as_secs_f64();
        if self.frames == 0 || seconds <= 0.0 {
            return None;
        }
        Some(self.frames as f64 / seconds)
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_fps() {
            Some(fps) => write!(f, "average: {:.2} fps", fps),
            None => write!(f, "average: no frames processed"),
        }
    }
}
