//! Corpus driver.
//!
//! Sweeps every record against the profiles of the entities it names until
//! no profile is open or the sweep budget runs out. A sweep only sees what
//! earlier records taught a profile, so a record seen before the deciding
//! one is only exploited on the next sweep.
//!
//! Logging levels:
//! - **INFO**: Solve start/end with totals
//! - **DEBUG**: One summary per sweep
//! - **WARN**: Entities whose observations contradict each other

mod workspace;

use std::collections::HashMap;

use datemark_config::{ContradictionPolicy, SolverConfig, ThreadCount};
use datemark_core::error::Result;
use datemark_core::{Corpus, DatemarkError, EntityId, EntityProfile};
use tracing::{debug, info, warn};

use crate::scope::SweepScope;
use crate::stats::SolveStats;
use crate::termination::{
    AllSettledTermination, OrTermination, SweepCountTermination, Termination,
};

use workspace::Workspace;

/// Runs the sweep loop over a corpus.
///
/// # Example
///
/// ```
/// use datemark_config::SolverConfig;
/// use datemark_core::Corpus;
/// use datemark_solver::CorpusSolver;
///
/// let corpus = Corpus::parse("25-12-95: Margot\n11-09-01: Margot\n").unwrap();
/// let solved = CorpusSolver::new(SolverConfig::default()).solve_all(&corpus).unwrap();
///
/// assert!(solved.profile("Margot").unwrap().is_solved());
/// assert_eq!(solved.stats().sweeps, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CorpusSolver {
    config: SolverConfig,
}

impl CorpusSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves every entity of `corpus` from scratch.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid, under
    /// [`ContradictionPolicy::Fail`] when an entity's observations leave it no
    /// consistent reading, or when a dedicated thread pool cannot be built.
    pub fn solve_all(&self, corpus: &Corpus) -> Result<SolvedCorpus> {
        self.solve_with_profiles(corpus, HashMap::new())
    }

    /// Like [`solve_all`](Self::solve_all), continuing from existing profiles.
    pub fn solve_with_profiles(
        &self,
        corpus: &Corpus,
        profiles: HashMap<EntityId, EntityProfile>,
    ) -> Result<SolvedCorpus> {
        self.config.validate()?;

        match self.config.thread_count {
            ThreadCount::Count(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|err| DatemarkError::Config(err.to_string()))?;
                pool.install(|| self.run(corpus, profiles))
            }
            ThreadCount::Auto | ThreadCount::None => self.run(corpus, profiles),
        }
    }

    fn run(
        &self,
        corpus: &Corpus,
        profiles: HashMap<EntityId, EntityProfile>,
    ) -> Result<SolvedCorpus> {
        let termination = OrTermination::new(
            SweepCountTermination::new(self.config.sweep_limit()),
            AllSettledTermination,
        );
        let parallel = self.config.thread_count.is_parallel();

        let mut workspace = Workspace::new(profiles);
        let mut scope = SweepScope::new();
        scope.start_solving();

        info!(
            event = "solve_start",
            records = corpus.len(),
            sweep_limit = self.config.sweep_limit(),
            parallel = parallel,
        );

        let observations = parallel.then(|| workspace.index_observations(corpus));

        while !termination.is_terminated(&scope) {
            let sweep = scope.increment_sweep_count();
            let before = workspace.statuses();

            let calls = match &observations {
                Some(observations) => workspace.sweep_parallel(observations),
                None => workspace.sweep_sequential(corpus),
            };
            scope.record_constrain_calls(calls);
            scope.update_counts(workspace.profiles());

            debug!(
                event = "sweep_end",
                sweep = sweep,
                constrain_calls = calls,
                solved = scope.solved_count(),
                open = scope.open_count(),
                contradicted = scope.contradicted_count(),
            );

            let contradicted = workspace.newly_contradicted(&before);
            for entity in &contradicted {
                warn!(event = "contradiction", entity = %entity, sweep = sweep);
            }
            if self.config.contradiction_policy == ContradictionPolicy::Fail {
                if let Some(entity) = contradicted.into_iter().next() {
                    return Err(DatemarkError::Contradiction { entity, sweep });
                }
            }
        }

        let stats = SolveStats::from_scope(&scope);
        info!(
            event = "solve_end",
            sweeps = stats.sweeps,
            entities = stats.entities,
            solved = stats.solved,
            open = stats.open,
            contradicted = stats.contradicted,
            converged = stats.converged(),
            duration_ms = u64::try_from(stats.elapsed.as_millis()).unwrap_or(u64::MAX),
        );

        Ok(SolvedCorpus {
            profiles: workspace.into_profiles(),
            stats,
        })
    }
}

/// Profiles of every entity of a corpus after the sweep loop.
#[derive(Debug, Clone)]
pub struct SolvedCorpus {
    profiles: HashMap<EntityId, EntityProfile>,
    stats: SolveStats,
}

impl SolvedCorpus {
    pub fn profile(&self, name: &str) -> Option<&EntityProfile> {
        self.profiles.get(name)
    }

    pub fn profiles(&self) -> &HashMap<EntityId, EntityProfile> {
        &self.profiles
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Returns true if every entity ended solved.
    pub fn is_fully_solved(&self) -> bool {
        self.profiles.values().all(EntityProfile::is_solved)
    }

    /// Entities that did not end solved, sorted by name.
    pub fn unresolved(&self) -> Vec<EntityId> {
        let mut names: Vec<EntityId> = self
            .profiles
            .iter()
            .filter(|(_, profile)| !profile.is_solved())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn into_profiles(self) -> HashMap<EntityId, EntityProfile> {
        self.profiles
    }
}
