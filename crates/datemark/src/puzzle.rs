//! The puzzle contract and the diary puzzle.

use std::collections::BTreeSet;
use std::fmt;

use datemark_config::SolverConfig;
use datemark_core::error::Result;
use datemark_core::{Corpus, DatemarkError, EntityId};
use datemark_solver::{matches, CorpusSolver};

/// A puzzle loaded from raw text that produces a displayable answer.
pub trait Puzzle {
    type Output: fmt::Display;

    /// Parses the raw input text.
    fn load_input(&mut self, input: &str) -> Result<()>;

    /// Computes the answer for the loaded input.
    fn solve(&mut self) -> Result<Self::Output>;
}

/// Which diary entities wrote an entry on the configured date.
#[derive(Debug, Clone, Default)]
pub struct DiaryPuzzle {
    config: SolverConfig,
    corpus: Option<Corpus>,
}

impl DiaryPuzzle {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            corpus: None,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn corpus(&self) -> Option<&Corpus> {
        self.corpus.as_ref()
    }
}

impl Puzzle for DiaryPuzzle {
    type Output = MatchedNames;

    fn load_input(&mut self, input: &str) -> Result<()> {
        self.corpus = Some(Corpus::parse(input)?);
        Ok(())
    }

    fn solve(&mut self) -> Result<MatchedNames> {
        #[cfg(feature = "console")]
        datemark_console::init();

        let corpus = self
            .corpus
            .as_ref()
            .ok_or_else(|| DatemarkError::InvalidState("no input loaded".to_string()))?;

        let solved = CorpusSolver::new(self.config.clone()).solve_all(corpus)?;
        Ok(matches(corpus, &solved, self.config.target_date()).into())
    }
}

/// Matching entity names in byte order; displays as space-separated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedNames(Vec<EntityId>);

impl MatchedNames {
    pub fn names(&self) -> &[EntityId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityId> {
        self.0.iter()
    }
}

impl From<BTreeSet<EntityId>> for MatchedNames {
    fn from(names: BTreeSet<EntityId>) -> Self {
        Self(names.into_iter().collect())
    }
}

impl fmt::Display for MatchedNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
