use super::*;

fn set(components: &[Component]) -> ComponentSet {
    components.iter().copied().collect()
}

#[test]
fn test_unknown_excludes_year_from_middle() {
    let profile = EntityProfile::unknown();
    assert_eq!(profile.slot(Slot::A), ComponentSet::ALL);
    assert_eq!(profile.slot(Slot::B), ComponentSet::NON_YEAR);
    assert_eq!(profile.slot(Slot::C), ComponentSet::ALL);
    assert_eq!(profile.status(), ProfileStatus::Open);
}

#[test]
fn test_solved_status() {
    let profile = EntityProfile::from_slots(
        ComponentSet::only(Component::Month),
        ComponentSet::only(Component::Day),
        ComponentSet::only(Component::Year),
    );
    assert!(profile.is_solved());
    assert_eq!(profile.assignment(Component::Day), Some(Slot::B));
    assert_eq!(profile.assignment(Component::Month), Some(Slot::A));
    assert_eq!(profile.assignment(Component::Year), Some(Slot::C));
}

#[test]
fn test_assignment_requires_solved() {
    let profile = EntityProfile::from_slots(
        ComponentSet::only(Component::Month),
        ComponentSet::NON_YEAR,
        ComponentSet::only(Component::Year),
    );
    assert!(profile.is_open());
    assert_eq!(profile.single_slot_with(Component::Month), Some(Slot::A));
    assert_eq!(profile.assignment(Component::Month), None);
}

#[test]
fn test_single_slot_with_rejects_duplicates() {
    let profile = EntityProfile::from_slots(
        ComponentSet::only(Component::Day),
        ComponentSet::only(Component::Day),
        ComponentSet::ALL,
    );
    assert_eq!(profile.single_slot_with(Component::Day), None);
}

#[test]
fn test_empty_slot_is_contradiction_and_sticky() {
    let mut profile = EntityProfile::unknown();
    profile.slot_mut(Slot::B).remove(Component::Day);
    profile.slot_mut(Slot::B).remove(Component::Month);
    assert_eq!(profile.refresh_status(), ProfileStatus::Contradicted);

    *profile.slot_mut(Slot::B) = ComponentSet::NON_YEAR;
    assert_eq!(profile.refresh_status(), ProfileStatus::Contradicted);
}

#[test]
fn test_slots_containing() {
    let profile = EntityProfile::from_slots(
        set(&[Component::Day, Component::Year]),
        set(&[Component::Month]),
        set(&[Component::Day]),
    );
    assert_eq!(profile.slots_containing(Component::Day), vec![Slot::A, Slot::C]);
    assert_eq!(profile.slots_containing(Component::Year), vec![Slot::A]);
    assert!(profile.slots_containing(Component::Month).contains(&Slot::B));
}

#[test]
fn test_uncovered_component_is_contradiction() {
    let profile = EntityProfile::from_slots(
        ComponentSet::NON_YEAR,
        ComponentSet::NON_YEAR,
        ComponentSet::NON_YEAR,
    );
    assert!(profile.is_contradicted());
}
