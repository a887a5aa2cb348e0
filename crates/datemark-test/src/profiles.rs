//! Profile builders.

use datemark_core::{Component, ComponentSet, EntityProfile};

fn component(code: char) -> Component {
    match code {
        'D' => Component::Day,
        'M' => Component::Month,
        'Y' => Component::Year,
        other => panic!("unknown component code '{other}'"),
    }
}

fn set(codes: &str) -> ComponentSet {
    codes.chars().map(component).collect()
}

/// Solved profile from a format such as `"DMY"` or `"YMD"`.
pub fn solved_profile(format: &str) -> EntityProfile {
    let codes: Vec<char> = format.chars().collect();
    assert_eq!(codes.len(), 3, "format must name three slots");
    let profile = EntityProfile::from_slots(
        ComponentSet::only(component(codes[0])),
        ComponentSet::only(component(codes[1])),
        ComponentSet::only(component(codes[2])),
    );
    assert!(profile.is_solved(), "format {format} is not a permutation");
    profile
}

/// Profile from per-slot candidate codes, e.g. `profile_of("DY", "M", "DY")`.
pub fn profile_of(a: &str, b: &str, c: &str) -> EntityProfile {
    EntityProfile::from_slots(set(a), set(b), set(c))
}
