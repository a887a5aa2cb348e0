//! Termination conditions for the sweep loop.

mod all_settled;
mod composite;
mod sweep_count;

use std::fmt::Debug;

use crate::scope::SweepScope;

pub use all_settled::AllSettledTermination;
pub use composite::OrTermination;
pub use sweep_count::SweepCountTermination;

/// Trait for determining when to stop sweeping.
pub trait Termination: Send + Sync + Debug {
    /// Returns true if no further sweep should run.
    fn is_terminated(&self, scope: &SweepScope) -> bool;
}

#[cfg(test)]
mod tests;
