//! Membership query: which entities have an entry on a given date.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use datemark_core::calendar::{date_parts, trailing_year_digits};
use datemark_core::{Corpus, DateNotation, EntityId};
use tracing::{debug, warn};

use crate::driver::SolvedCorpus;
use crate::projector::{project, ProjectionError};

/// Cheap literal check run before projection.
///
/// A notation can only resolve to `target` if its raw values include the
/// target's day, its month and the two trailing digits of its year.
pub fn is_candidate(notation: &DateNotation, target: NaiveDate) -> bool {
    let (day, month, year) = date_parts(target);
    notation.contains_value(day)
        && notation.contains_value(month)
        && trailing_year_digits(year).is_some_and(|digits| {
            notation.contains_value(digits)
        })
}

/// Entities with at least one record that resolves to `target`.
///
/// Entities without a solved profile never match. The set iterates in byte
/// order of the names.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use datemark_core::Corpus;
/// use datemark_solver::{matches, CorpusSolver};
///
/// let corpus = Corpus::parse("25-12-95: Margot\n11-09-01: Margot\n01-09-11: Zed\n").unwrap();
/// let solved = CorpusSolver::default().solve_all(&corpus).unwrap();
/// let target = NaiveDate::from_ymd_opt(2001, 9, 11).unwrap();
///
/// let names: Vec<String> = matches(&corpus, &solved, target)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(names, vec!["Margot"]);
/// ```
pub fn matches(corpus: &Corpus, solved: &SolvedCorpus, target: NaiveDate) -> BTreeSet<EntityId> {
    let mut names = BTreeSet::new();

    for record in corpus.iter().filter(|r| is_candidate(&r.date, target)) {
        for entity in &record.entities {
            if names.contains(entity) {
                continue;
            }
            let Some(profile) = solved.profile(entity.as_str()) else {
                debug!(event = "query_skip", entity = %entity, reason = "unknown");
                continue;
            };
            match project(profile, &record.date) {
                Ok(date) if date == target => {
                    names.insert(entity.clone());
                }
                Ok(_) => {}
                Err(ProjectionError::Unsolved) => {
                    debug!(event = "query_skip", entity = %entity, reason = "unsolved");
                }
                Err(err @ ProjectionError::InvalidDate { .. }) => {
                    warn!(
                        event = "query_skip",
                        entity = %entity,
                        notation = %record.date,
                        reason = %err,
                    );
                }
            }
        }
    }

    names
}
