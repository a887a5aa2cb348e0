//! Statistics for one corpus solve.

use std::time::Duration;

use crate::scope::SweepScope;

/// Summary of a finished solve.
///
/// # Example
///
/// ```
/// use datemark_solver::{SolveStats, SweepScope};
///
/// let mut scope = SweepScope::new();
/// scope.start_solving();
/// scope.increment_sweep_count();
/// scope.record_constrain_calls(3);
///
/// let stats = SolveStats::from_scope(&scope);
/// assert_eq!(stats.sweeps, 1);
/// assert_eq!(stats.constrain_calls, 3);
/// assert!(stats.converged());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Full sweeps run over the corpus.
    pub sweeps: u64,
    /// Calls into the propagation rules on open profiles.
    pub constrain_calls: u64,
    /// Distinct entities seen.
    pub entities: usize,
    pub solved: usize,
    pub open: usize,
    pub contradicted: usize,
    pub elapsed: Duration,
}

impl SolveStats {
    pub fn from_scope(scope: &SweepScope) -> Self {
        Self {
            sweeps: scope.sweep_count(),
            constrain_calls: scope.constrain_calls(),
            entities: scope.entity_count(),
            solved: scope.solved_count(),
            open: scope.open_count(),
            contradicted: scope.contradicted_count(),
            elapsed: scope.elapsed(),
        }
    }

    /// Returns true if no profile was left open.
    pub fn converged(&self) -> bool {
        self.open == 0
    }

    /// Share of entities that ended solved, in 0.0..=1.0.
    pub fn solved_ratio(&self) -> f64 {
        if self.entities == 0 {
            1.0
        } else {
            self.solved as f64 / self.entities as f64
        }
    }
}
