use super::*;

#[test]
fn register_assigns_sequential_ids() {
    let mut set = RevealSet::new();
    assert_eq!(set.register(3), vec![TargetId(0), TargetId(1), TargetId(2)]);
    assert_eq!(set.register(1), vec![TargetId(3)]);
    assert_eq!(set.total(), 4);
    assert_eq!(set.pending_count(), 4);
}

#[test]
fn first_intersection_reveals() {
    let mut set = RevealSet::new();
    let ids = set.register(2);
    assert!(set.on_intersection(ids[0], true));
    assert!(!set.is_pending(ids[0]));
    assert!(set.is_pending(ids[1]));
}

#[test]
fn repeat_intersection_is_ignored() {
    let mut set = RevealSet::new();
    let ids = set.register(1);
    assert!(set.on_intersection(ids[0], true));
    assert!(!set.on_intersection(ids[0], false));
    assert!(!set.on_intersection(ids[0], true));
}

#[test]
fn non_intersecting_report_keeps_target_pending() {
    let mut set = RevealSet::new();
    let ids = set.register(1);
    assert!(!set.on_intersection(ids[0], false));
    assert!(set.is_pending(ids[0]));
}

#[test]
fn unknown_target_is_ignored() {
    let mut set = RevealSet::new();
    set.register(1);
    assert!(!set.on_intersection(TargetId(7), true));
    assert_eq!(set.pending_count(), 1);
}

#[test]
fn pending_set_only_shrinks() {
    let mut set = RevealSet::new();
    let ids = set.register(4);
    let mut last = set.pending_count();
    for id in ids.iter().chain(ids.iter()) {
        set.on_intersection(*id, true);
        assert!(set.pending_count() <= last);
        last = set.pending_count();
    }
    assert_eq!(last, 0);
}
