//! Repeated-run timing harness.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FdError, Result};

/// Wall-clock durations of repeated runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    /// Duration of each trial, in run order.
    pub trials: Vec<Duration>,
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
}

/// Runs a closure a fixed number of times and records how long each run took.
#[derive(Debug, Clone, Copy)]
pub struct TimingHarness {
    trials: usize,
}

impl TimingHarness {
    /// Create a harness running `trials` times; zero trials is rejected.
    pub fn new(trials: usize) -> Result<Self> {
        if trials == 0 {
            return Err(FdError::InvalidParameter(
                "number of trials must be at least 1".to_string(),
            ));
        }
        Ok(Self { trials })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run `f` once per trial, stopping at the first error.
    ///
    /// Returns the output of the last trial together with the timings.
    pub fn run<T, F>(&self, mut f: F) -> Result<(T, TimingReport)>
    where
        F: FnMut() -> Result<T>,
    {
        let mut durations = Vec::with_capacity(self.trials);
        let mut last = None;

        for trial in 0..self.trials {
            let started = Instant::now();
            let output = f()?;
            let elapsed = started.elapsed();
            debug!(
                trial = trial + 1,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "trial finished"
            );

            durations.push(elapsed);
            last = Some(output);
        }

        let output = last.ok_or_else(|| {
            FdError::InvalidParameter("number of trials must be at least 1".to_string())
        })?;
        Ok((output, TimingReport::from_durations(durations)))
    }
}

impl TimingReport {
    /// Summarize per-trial durations. An empty list yields zero durations.
    pub fn from_durations(trials: Vec<Duration>) -> Self {
        let total: Duration = trials.iter().sum();
        let average = match u32::try_from(trials.len()) {
            Ok(0) => Duration::ZERO,
            Ok(n) => total / n,
            Err(_) => total.div_f64(trials.len() as f64),
        };
        let min = trials.iter().min().copied().unwrap_or_default();
        let max = trials.iter().max().copied().unwrap_or_default();

        Self {
            trials,
            average,
            min,
            max,
        }
    }
}
