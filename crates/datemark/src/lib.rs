//! Datemark - Resolve ambiguous date notations
//!
//! Each entity of a diary writes its dates in one fixed but unstated field
//! order. Datemark deduces that order per entity from all of its records and
//! answers which entities have an entry on a given date.
//!
//! # Example
//!
//! ```rust
//! use datemark::prelude::*;
//!
//! let mut puzzle = DiaryPuzzle::default();
//! puzzle.load_input("25-12-95: Margot\n11-09-01: Margot\n12-25-95: Peter\n09-11-01: Peter\n")?;
//!
//! let answer = puzzle.solve()?;
//! assert_eq!(answer.to_string(), "Margot Peter");
//! # Ok::<(), datemark::DatemarkError>(())
//! ```

mod puzzle;

pub use puzzle::{DiaryPuzzle, MatchedNames, Puzzle};

pub use datemark_config::{ContradictionPolicy, SolverConfig, ThreadCount};
pub use datemark_core::error::Result;
pub use datemark_core::{
    calendar, Component, ComponentSet, Corpus, DateNotation, DatemarkError, EntityId,
    EntityProfile, ParseError, ProfileStatus, Record, Slot,
};
pub use datemark_solver::{
    constrain, matches, project, CorpusSolver, ProjectionError, SolveStats, SolvedCorpus,
};

#[cfg(feature = "console")]
pub use datemark_console as console;

pub mod prelude {
    pub use super::{DiaryPuzzle, MatchedNames, Puzzle};
    pub use super::{Corpus, CorpusSolver, SolverConfig};
    pub use super::{DateNotation, EntityId, EntityProfile};
}
