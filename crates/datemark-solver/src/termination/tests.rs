//! Tests for termination conditions.

use super::*;
use datemark_test::{profile_of, solved_profile};

#[test]
fn test_sweep_count_termination() {
    let mut scope = SweepScope::new();
    let term = SweepCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_sweep_count();
    scope.increment_sweep_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_sweep_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_all_settled_needs_a_sweep() {
    let scope = SweepScope::new();
    assert!(!AllSettledTermination.is_terminated(&scope));
}

#[test]
fn test_all_settled_ignores_contradicted() {
    let mut scope = SweepScope::new();
    scope.increment_sweep_count();

    let solved = solved_profile("YMD");
    let contradicted = profile_of("Y", "", "Y");
    let open = profile_of("DMY", "DM", "DMY");

    scope.update_counts([&solved, &open]);
    assert!(!AllSettledTermination.is_terminated(&scope));

    scope.update_counts([&solved, &contradicted]);
    assert_eq!(scope.contradicted_count(), 1);
    assert!(AllSettledTermination.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let mut scope = SweepScope::new();
    let term = OrTermination::new(SweepCountTermination::new(2), AllSettledTermination);
    let open = profile_of("DMY", "DM", "DMY");

    scope.increment_sweep_count();
    scope.update_counts([&open]);
    assert!(!term.is_terminated(&scope));

    scope.increment_sweep_count();
    assert!(term.is_terminated(&scope));
}
