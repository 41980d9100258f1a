use std::time::{Duration, Instant};

/// Timer accumulating the time spent while it is running.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    started: Option<Instant>,
    elapsed_time: Duration,
}

impl Timer {
    /// Starts the timer. Does nothing if it is already running.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stops the timer and adds the time since the last start.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed_time += started.elapsed();
        }
    }

    /// Stops the timer and clears the elapsed time.
    pub fn reset(&mut self) {
        self.started = None;
        self.elapsed_time = Duration::ZERO;
    }

    /// Returns whether the timer is running.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Returns the elapsed time in seconds.
    pub fn get_elapsed_time(&self) -> f64 {
        let running = self.started.map_or(Duration::ZERO, |started| started.elapsed());

        (self.elapsed_time + running).as_secs_f64()
    }
}
