use super::*;

#[test]
fn test_slot_others() {
    assert_eq!(Slot::A.others(), [Slot::B, Slot::C]);
    assert_eq!(Slot::B.others(), [Slot::A, Slot::C]);
    assert_eq!(Slot::C.others(), [Slot::A, Slot::B]);
}

#[test]
fn test_slot_index_matches_order() {
    for (i, slot) in Slot::ALL.into_iter().enumerate() {
        assert_eq!(slot.index(), i);
    }
}

#[test]
fn test_get_and_values() {
    let notation = DateNotation::new(11, -3, 2001);
    assert_eq!(notation.get(Slot::A), 11);
    assert_eq!(notation.get(Slot::B), -3);
    assert_eq!(notation.get(Slot::C), 2001);
    assert_eq!(notation.values(), [11, -3, 2001]);
}

#[test]
fn test_display_pads_two_digits() {
    assert_eq!(DateNotation::new(1, 9, 11).to_string(), "01-09-11");
}
