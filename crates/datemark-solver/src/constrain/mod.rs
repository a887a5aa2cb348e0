//! Propagation rules for a single observation.
//!
//! [`constrain`] narrows an [`EntityProfile`] with one [`DateNotation`]:
//!
//! 1. Range narrowing: Day needs a value in 1..=31, Month in 1..=12.
//! 2. Claimed removal: a singleton slot's component leaves the other slots.
//! 3. Isolation: a component left in exactly one slot claims that slot.
//! 4. Day-in-month: with the month fixed, a value longer than the month can
//!    be under either year reading is not a day.
//!
//! Steps 2 and 3 run together to a fixed point, before and after step 4.

use datemark_core::calendar::{days_in_month, max_days_in_month, pivot_year};
use datemark_core::{Component, ComponentSet, DateNotation, EntityProfile, ProfileStatus, Slot};

const DAY_RANGE: std::ops::RangeInclusive<i32> = 1..=31;
const MONTH_RANGE: std::ops::RangeInclusive<i32> = 1..=12;

/// Narrows `profile` with one observation and returns its new status.
///
/// Profiles that are already solved or contradicted are left untouched.
///
/// # Examples
///
/// ```
/// use datemark_core::{Component, ComponentSet, DateNotation, EntityProfile, Slot};
/// use datemark_solver::constrain;
///
/// let mut profile = EntityProfile::unknown();
/// constrain(&mut profile, &DateNotation::new(5, 13, 99));
///
/// assert!(profile.is_solved());
/// assert_eq!(profile.slot(Slot::A), ComponentSet::only(Component::Month));
/// assert_eq!(profile.slot(Slot::B), ComponentSet::only(Component::Day));
/// assert_eq!(profile.slot(Slot::C), ComponentSet::only(Component::Year));
/// ```
pub fn constrain(profile: &mut EntityProfile, notation: &DateNotation) -> ProfileStatus {
    if !profile.is_open() {
        return profile.status();
    }

    narrow_ranges(profile, notation);
    if reduce(profile) != ProfileStatus::Open {
        return profile.status();
    }

    if refine_day_in_month(profile, notation) {
        reduce(profile);
    }
    profile.refresh_status()
}

/// Runs claimed removal and isolation claiming until neither changes anything.
pub fn reduce(profile: &mut EntityProfile) -> ProfileStatus {
    loop {
        let removed = remove_claimed(profile);
        let claimed = claim_isolated(profile);
        let status = profile.refresh_status();
        if status == ProfileStatus::Contradicted || !(removed || claimed) {
            return status;
        }
    }
}

/// Drops Day and Month from slots whose observed value is out of range.
///
/// Year survives wherever it was already a candidate.
pub fn narrow_ranges(profile: &mut EntityProfile, notation: &DateNotation) {
    for slot in Slot::ALL {
        let value = notation.get(slot);
        let current = profile.slot(slot);
        let mut narrowed = current.intersection(ComponentSet::only(Component::Year));
        if current.contains(Component::Day) && DAY_RANGE.contains(&value) {
            narrowed.insert(Component::Day);
        }
        if current.contains(Component::Month) && MONTH_RANGE.contains(&value) {
            narrowed.insert(Component::Month);
        }
        *profile.slot_mut(slot) = narrowed;
    }
}

/// Removes each singleton slot's component from the other two slots.
///
/// Returns true if any candidate set changed.
pub fn remove_claimed(profile: &mut EntityProfile) -> bool {
    let mut changed = false;
    for slot in Slot::ALL {
        let Some(claimed) = profile.slot(slot).single() else {
            continue;
        };
        for other in slot.others() {
            changed |= profile.slot_mut(other).remove(claimed);
        }
    }
    changed
}

/// Forces a slot to {X} when it is the only slot still holding X.
///
/// Returns true if any candidate set changed.
pub fn claim_isolated(profile: &mut EntityProfile) -> bool {
    let mut changed = false;
    for component in Component::ALL {
        let slots = profile.slots_containing(component);
        let [slot] = slots.as_slice() else {
            continue;
        };
        let claimed = ComponentSet::only(component);
        if profile.slot(*slot) != claimed {
            *profile.slot_mut(*slot) = claimed;
            changed = true;
        }
    }
    changed
}

/// Separates day from year once the month slot is known.
///
/// Each of the two remaining values is read as a year to bound how long the
/// month can be for the other one. A value above that bound cannot be the day.
/// Months that always have 31 days carry no information and are skipped.
///
/// Returns true if any candidate set changed.
pub fn refine_day_in_month(profile: &mut EntityProfile, notation: &DateNotation) -> bool {
    let Some(month_slot) = profile.single_slot_with(Component::Month) else {
        return false;
    };
    let Ok(month) = u32::try_from(notation.get(month_slot)) else {
        return false;
    };
    match max_days_in_month(month) {
        Some(31) | None => return false,
        Some(_) => {}
    }

    let [x, y] = month_slot.others();
    let (vx, vy) = (notation.get(x), notation.get(y));

    let mut changed = false;
    if exceeds_month(vx, pivot_year(vy), month) {
        changed |= profile.slot_mut(x).remove(Component::Day);
    }
    if exceeds_month(vy, pivot_year(vx), month) {
        changed |= profile.slot_mut(y).remove(Component::Day);
    }
    changed
}

fn exceeds_month(day: i32, year: i32, month: u32) -> bool {
    days_in_month(year, month).is_some_and(|days| i64::from(day) > i64::from(days))
}
