//! Sweep-level scope.

use std::time::{Duration, Instant};

use datemark_core::{EntityProfile, ProfileStatus};

/// Progress of one corpus solve, as seen by terminations.
#[derive(Debug, Clone, Default)]
pub struct SweepScope {
    start_time: Option<Instant>,
    sweep_count: u64,
    constrain_calls: u64,
    solved_count: usize,
    open_count: usize,
    contradicted_count: usize,
}

impl SweepScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.sweep_count = 0;
        self.constrain_calls = 0;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn increment_sweep_count(&mut self) -> u64 {
        self.sweep_count += 1;
        self.sweep_count
    }

    pub fn sweep_count(&self) -> u64 {
        self.sweep_count
    }

    pub fn record_constrain_calls(&mut self, calls: u64) {
        self.constrain_calls += calls;
    }

    pub fn constrain_calls(&self) -> u64 {
        self.constrain_calls
    }

    /// Recounts profile statuses after a sweep.
    pub fn update_counts<'a>(&mut self, profiles: impl IntoIterator<Item = &'a EntityProfile>) {
        self.solved_count = 0;
        self.open_count = 0;
        self.contradicted_count = 0;
        for profile in profiles {
            match profile.status() {
                ProfileStatus::Solved => self.solved_count += 1,
                ProfileStatus::Open => self.open_count += 1,
                ProfileStatus::Contradicted => self.contradicted_count += 1,
            }
        }
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    pub fn contradicted_count(&self) -> usize {
        self.contradicted_count
    }

    pub fn entity_count(&self) -> usize {
        self.solved_count + self.open_count + self.contradicted_count
    }
}
