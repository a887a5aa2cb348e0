//! Datemark Solver Engine
//!
//! This crate resolves which slot of a raw date notation means day, month and
//! year for every entity of a corpus:
//! - Propagation rules narrowing one profile from one observation
//! - Corpus driver sweeping all records until profiles settle
//! - Termination conditions for the sweep loop
//! - Date projection and the membership query

pub mod constrain;
pub mod driver;
pub mod projector;
pub mod query;
pub mod scope;
pub mod stats;
pub mod termination;

pub use constrain::constrain;
pub use driver::{CorpusSolver, SolvedCorpus};
pub use projector::{project, ProjectionError};
pub use query::{is_candidate, matches};
pub use scope::SweepScope;
pub use stats::SolveStats;
pub use termination::{
    AllSettledTermination, OrTermination, SweepCountTermination, Termination,
};
