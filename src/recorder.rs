//! Per-run trace samples and per-strategy elapsed times.

use std::time::{Duration, Instant};

use fxhash::FxHashMap;

use crate::solver::Strategy;

/// Default visited-count increase between two trace samples.
pub const DEFAULT_SAMPLE_INTERVAL: usize = 5;

/// One point of the visited-count-over-time curve of a run.
///
/// Samples are *triggered* by visited-count milestones, so how many samples a
/// run produces and which visited values they carry is deterministic; only
/// the `at` field depends on the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSample {
    /// Time since the run started.
    pub at: Duration,
    /// Cumulative number of visited cells at that moment.
    pub visited: usize,
}

/// Accumulates [TraceSample]s for the run in flight and remembers the total
/// elapsed time of the most recent run of every strategy.
///
/// A run records one sample at visited-count 0, one whenever the count has
/// grown by at least `sample_interval` since the previous sample, and one at
/// termination reflecting the terminal count (unless the last interval
/// sample already did).
#[derive(Clone, Debug)]
pub struct RunRecorder {
    pub sample_interval: usize,
    samples: Vec<TraceSample>,
    last_sampled: usize,
    started: Instant,
    elapsed: FxHashMap<Strategy, Duration>,
}

impl Default for RunRecorder {
    fn default() -> RunRecorder {
        RunRecorder::new()
    }
}

impl RunRecorder {
    pub fn new() -> RunRecorder {
        RunRecorder::with_interval(DEFAULT_SAMPLE_INTERVAL)
    }

    pub fn with_interval(sample_interval: usize) -> RunRecorder {
        RunRecorder {
            sample_interval,
            samples: Vec::new(),
            last_sampled: 0,
            started: Instant::now(),
            elapsed: FxHashMap::default(),
        }
    }

    /// Starts a fresh run: clears the previous run's samples and records the
    /// visited-count 0 sample.
    pub fn begin(&mut self) {
        self.samples.clear();
        self.started = Instant::now();
        self.push_sample(0);
    }

    /// Reports that the running visited-count reached `visited`; records a
    /// sample once the count has grown by at least the interval.
    pub fn on_visit(&mut self, visited: usize) {
        if visited - self.last_sampled >= self.sample_interval {
            self.push_sample(visited);
        }
    }

    /// Ends the run: records the terminal sample if the count moved since the
    /// last one, stores the strategy's total elapsed time (overwriting any
    /// earlier run of the same strategy) and returns it.
    pub fn finish(&mut self, strategy: Strategy, visited: usize) -> Duration {
        if self.samples.last().map(|s| s.visited) != Some(visited) {
            self.push_sample(visited);
        }
        let total = self.started.elapsed();
        self.elapsed.insert(strategy, total);
        total
    }

    fn push_sample(&mut self, visited: usize) {
        self.samples.push(TraceSample {
            at: self.started.elapsed(),
            visited,
        });
        self.last_sampled = visited;
    }

    /// The samples of the current (or just finished) run.
    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    /// Total elapsed time of the most recent run of `strategy`.
    pub fn elapsed(&self, strategy: Strategy) -> Option<Duration> {
        self.elapsed.get(&strategy).copied()
    }

    /// The whole per-strategy elapsed table, for cross-algorithm comparison.
    pub fn elapsed_times(&self) -> &FxHashMap<Strategy, Duration> {
        &self.elapsed
    }
}
