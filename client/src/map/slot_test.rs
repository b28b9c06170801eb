use super::*;

#[test]
fn new_slot_is_unbound() {
    let slot = MapSlot::<u32>::new();
    assert!(!slot.is_bound());
    assert_eq!(slot.with(|m| m.copied()), None);
}

#[test]
fn first_bind_wins() {
    let slot = MapSlot::new();
    assert!(slot.bind_with(|| Some(1)));
    assert!(!slot.bind_with(|| Some(2)));
    assert_eq!(slot.with(|m| m.copied()), Some(1));
}

#[test]
fn later_bind_does_not_run_constructor() {
    let slot = MapSlot::new();
    slot.bind_with(|| Some("map"));
    let mut ran = false;
    slot.bind_with(|| {
        ran = true;
        Some("other")
    });
    assert!(!ran);
}

#[test]
fn failed_create_leaves_slot_empty() {
    let slot = MapSlot::<u32>::new();
    assert!(!slot.bind_with(|| None));
    assert!(!slot.is_bound());
    assert!(slot.bind_with(|| Some(3)));
}

#[test]
fn clones_share_binding() {
    let slot = MapSlot::new();
    let other = slot.clone();
    other.bind_with(|| Some(7));
    assert!(slot.is_bound());
}
