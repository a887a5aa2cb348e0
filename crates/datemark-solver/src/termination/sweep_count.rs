//! Sweep count termination.

use super::Termination;
use crate::scope::SweepScope;

/// Terminates after a number of sweeps.
///
/// # Example
///
/// ```
/// use datemark_solver::termination::SweepCountTermination;
///
/// // Terminate after 30 sweeps
/// let term = SweepCountTermination::new(30);
/// ```
#[derive(Debug, Clone)]
pub struct SweepCountTermination {
    limit: u64,
}

impl SweepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for SweepCountTermination {
    fn is_terminated(&self, scope: &SweepScope) -> bool {
        scope.sweep_count() >= self.limit
    }
}
