//! Composite termination conditions.

use super::Termination;
use crate::scope::SweepScope;

/// Terminates when either condition holds.
///
/// # Example
///
/// ```
/// use datemark_solver::termination::{
///     AllSettledTermination, OrTermination, SweepCountTermination,
/// };
///
/// let term = OrTermination::new(SweepCountTermination::new(30), AllSettledTermination);
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrTermination<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Termination, B: Termination> Termination for OrTermination<A, B> {
    fn is_terminated(&self, scope: &SweepScope) -> bool {
        self.first.is_terminated(scope) || self.second.is_terminated(scope)
    }
}
