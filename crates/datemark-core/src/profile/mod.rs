//! Per-entity deduction state.
//!
//! An [`EntityProfile`] holds one [`ComponentSet`] per [`Slot`], stored in a
//! slot-indexed array. All mutation goes through `&mut self` accessors keyed
//! by slot.

use std::fmt;

use crate::component::{Component, ComponentSet};
use crate::notation::Slot;

/// Where a profile stands in the deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileStatus {
    /// Some slot still has more than one candidate.
    #[default]
    Open,

    /// Every slot holds exactly one component, forming a permutation.
    Solved,

    /// Some slot has no candidate left, or some component fits no slot.
    /// Never leaves this state.
    Contradicted,
}

/// Candidate components for each slot of one entity's date notation.
///
/// # Examples
///
/// ```
/// use datemark_core::{Component, EntityProfile, Slot};
///
/// let profile = EntityProfile::unknown();
/// assert!(!profile.is_solved());
/// assert!(!profile.slot(Slot::B).contains(Component::Year));
/// assert_eq!(profile.slots_containing(Component::Year), vec![Slot::A, Slot::C]);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityProfile {
    slots: [ComponentSet; 3],
    status: ProfileStatus,
}

impl EntityProfile {
    /// The state of an entity that has not been observed yet.
    pub fn unknown() -> Self {
        Self::from_slots(ComponentSet::ALL, ComponentSet::NON_YEAR, ComponentSet::ALL)
    }

    /// Creates a profile from explicit candidate sets.
    pub fn from_slots(a: ComponentSet, b: ComponentSet, c: ComponentSet) -> Self {
        let mut profile = Self {
            slots: [a, b, c],
            status: ProfileStatus::Open,
        };
        profile.refresh_status();
        profile
    }

    #[inline]
    pub fn slot(&self, slot: Slot) -> ComponentSet {
        self.slots[slot.index()]
    }

    #[inline]
    pub fn slot_mut(&mut self, slot: Slot) -> &mut ComponentSet {
        &mut self.slots[slot.index()]
    }

    #[inline]
    pub fn status(&self) -> ProfileStatus {
        self.status
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.status == ProfileStatus::Solved
    }

    #[inline]
    pub fn is_contradicted(&self) -> bool {
        self.status == ProfileStatus::Contradicted
    }

    /// Returns true while the solver can still narrow this profile.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == ProfileStatus::Open
    }

    /// Recomputes the status from the candidate sets.
    pub fn refresh_status(&mut self) -> ProfileStatus {
        if self.status == ProfileStatus::Contradicted {
            return self.status;
        }
        let uncovered = Component::ALL
            .into_iter()
            .any(|component| !self.slots.iter().any(|set| set.contains(component)));
        self.status = if uncovered || self.slots.iter().any(|set| set.is_empty()) {
            ProfileStatus::Contradicted
        } else if self.slots.iter().all(|set| set.single().is_some()) {
            ProfileStatus::Solved
        } else {
            ProfileStatus::Open
        };
        self.status
    }

    /// The slot whose candidate set is exactly {component}, if there is exactly one.
    pub fn single_slot_with(&self, component: Component) -> Option<Slot> {
        let mut found = None;
        for slot in Slot::ALL {
            if self.slot(slot).single() == Some(component) {
                if found.is_some() {
                    return None;
                }
                found = Some(slot);
            }
        }
        found
    }

    /// Slots whose candidate set still contains `component`, in textual order.
    pub fn slots_containing(&self, component: Component) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.slot(*slot).contains(component))
            .collect()
    }

    /// The slot assigned to `component`. Only defined for solved profiles.
    pub fn assignment(&self, component: Component) -> Option<Slot> {
        if !self.is_solved() {
            return None;
        }
        self.single_slot_with(component)
    }
}

impl Default for EntityProfile {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Debug for EntityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityProfile")
            .field("a", &self.slots[0])
            .field("b", &self.slots[1])
            .field("c", &self.slots[2])
            .field("status", &self.status)
            .finish()
    }
}

impl fmt::Display for EntityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={} B={} C={}",
            self.slots[0], self.slots[1], self.slots[2]
        )
    }
}

#[cfg(test)]
mod tests;
