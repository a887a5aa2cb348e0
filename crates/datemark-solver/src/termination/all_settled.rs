//! Terminates once no profile can change any more.

use super::Termination;
use crate::scope::SweepScope;

/// Terminates after a sweep that leaves no profile open.
///
/// Contradicted profiles count as settled: further sweeps never touch them.
#[derive(Debug, Clone, Default)]
pub struct AllSettledTermination;

impl AllSettledTermination {
    pub fn new() -> Self {
        Self
    }
}

impl Termination for AllSettledTermination {
    fn is_terminated(&self, scope: &SweepScope) -> bool {
        scope.sweep_count() > 0 && scope.open_count() == 0
    }
}
