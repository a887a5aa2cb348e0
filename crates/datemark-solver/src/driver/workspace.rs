//! Slot-indexed profile storage used during a solve.

use std::collections::HashMap;

use datemark_core::{Corpus, DateNotation, EntityId, EntityProfile, ProfileStatus};
use rayon::prelude::*;

use crate::constrain::constrain;

/// Profiles in first-seen order, one writer per profile.
pub(super) struct Workspace {
    names: Vec<EntityId>,
    profiles: Vec<EntityProfile>,
    index: HashMap<EntityId, usize>,
}

impl Workspace {
    /// Seeds the workspace; seeded names are ordered by name.
    pub(super) fn new(seed: HashMap<EntityId, EntityProfile>) -> Self {
        let mut seeded: Vec<(EntityId, EntityProfile)> = seed.into_iter().collect();
        seeded.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut workspace = Self {
            names: Vec::with_capacity(seeded.len()),
            profiles: Vec::with_capacity(seeded.len()),
            index: HashMap::with_capacity(seeded.len()),
        };
        for (name, profile) in seeded {
            workspace.insert(name, profile);
        }
        workspace
    }

    fn insert(&mut self, name: EntityId, profile: EntityProfile) -> usize {
        let idx = self.profiles.len();
        self.index.insert(name.clone(), idx);
        self.names.push(name);
        self.profiles.push(profile);
        idx
    }

    /// Index of `entity`'s profile, creating an unknown profile on first sight.
    fn profile_index(&mut self, entity: &EntityId) -> usize {
        match self.index.get(entity) {
            Some(&idx) => idx,
            None => self.insert(entity.clone(), EntityProfile::unknown()),
        }
    }

    pub(super) fn profiles(&self) -> &[EntityProfile] {
        &self.profiles
    }

    pub(super) fn statuses(&self) -> Vec<ProfileStatus> {
        self.profiles.iter().map(EntityProfile::status).collect()
    }

    /// Entities contradicted now but not in `before`, in first-seen order.
    pub(super) fn newly_contradicted(&self, before: &[ProfileStatus]) -> Vec<EntityId> {
        self.profiles
            .iter()
            .enumerate()
            .filter(|(idx, profile)| {
                profile.is_contradicted()
                    && before.get(*idx) != Some(&ProfileStatus::Contradicted)
            })
            .map(|(idx, _)| self.names[idx].clone())
            .collect()
    }

    /// One pass over the records in order. Returns the number of constrain calls.
    pub(super) fn sweep_sequential(&mut self, corpus: &Corpus) -> u64 {
        let mut calls = 0_u64;
        for record in corpus {
            for entity in &record.entities {
                let idx = self.profile_index(entity);
                let profile = &mut self.profiles[idx];
                if !profile.is_open() {
                    continue;
                }
                constrain(profile, &record.date);
                calls += 1;
            }
        }
        calls
    }

    /// Groups each entity's observations in record order, registering every
    /// entity of the corpus. The result is indexed like the profiles.
    pub(super) fn index_observations(&mut self, corpus: &Corpus) -> Vec<Vec<DateNotation>> {
        let mut observations: Vec<Vec<DateNotation>> = vec![Vec::new(); self.profiles.len()];
        for record in corpus {
            for entity in &record.entities {
                let idx = self.profile_index(entity);
                if idx >= observations.len() {
                    observations.resize_with(idx + 1, Vec::new);
                }
                observations[idx].push(record.date);
            }
        }
        observations.resize_with(self.profiles.len(), Vec::new);
        observations
    }

    /// One pass with distinct entities constrained concurrently.
    ///
    /// Each profile replays its own observations in record order, which is
    /// exactly what a sequential sweep feeds it.
    pub(super) fn sweep_parallel(&mut self, observations: &[Vec<DateNotation>]) -> u64 {
        self.profiles
            .par_iter_mut()
            .zip(observations.par_iter())
            .map(|(profile, notations)| {
                let mut calls = 0_u64;
                for notation in notations {
                    if !profile.is_open() {
                        break;
                    }
                    constrain(profile, notation);
                    calls += 1;
                }
                calls
            })
            .sum()
    }

    pub(super) fn into_profiles(self) -> HashMap<EntityId, EntityProfile> {
        self.names.into_iter().zip(self.profiles).collect()
    }
}
