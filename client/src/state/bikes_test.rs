use super::*;
use crate::net::types::BikeStatus;

// =============================================================
// Helpers
// =============================================================

fn make_bike(id: i64, status: BikeStatus, user_id: Option<i64>) -> Bike {
    Bike {
        id,
        name: format!("bike-{id}"),
        lat: "50.1".to_owned(),
        long: "8.6".to_owned(),
        status,
        user_id,
        name_of_renter: None,
        username_of_renter: None,
    }
}

fn loaded(bikes: Vec<Bike>) -> BikesState {
    let mut state = BikesState::default();
    state.begin_fetch();
    state.finish_fetch(Ok(bikes));
    state
}

// =============================================================
// Query status
// =============================================================

#[test]
fn default_state_is_idle_and_needs_fetch() {
    let state = BikesState::default();
    assert_eq!(state.status(), QueryStatus::Idle);
    assert!(state.needs_fetch());
    assert!(state.bikes().is_empty());
}

#[test]
fn begin_fetch_is_loading() {
    let mut state = BikesState::default();
    state.begin_fetch();
    assert_eq!(state.status(), QueryStatus::Loading);
    assert!(!state.needs_fetch());
}

#[test]
fn failed_fetch_reports_error_message() {
    let mut state = BikesState::default();
    state.begin_fetch();
    state.finish_fetch(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.status(), QueryStatus::Error);
    assert_eq!(state.error.as_deref(), Some("offline"));
    assert!(!state.needs_fetch());
}

#[test]
fn successful_fetch_keeps_order() {
    let state = loaded(vec![
        make_bike(2, BikeStatus::Available, None),
        make_bike(1, BikeStatus::Rented, Some(5)),
    ]);
    assert_eq!(state.status(), QueryStatus::Success);
    let ids: Vec<i64> = state.bikes().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn fetch_collapses_duplicate_ids() {
    let state = loaded(vec![
        make_bike(1, BikeStatus::Available, None),
        make_bike(2, BikeStatus::Available, None),
        make_bike(1, BikeStatus::Rented, Some(3)),
    ]);
    assert_eq!(state.bikes().len(), 2);
    assert_eq!(state.bikes()[0].id, 1);
    assert_eq!(state.bikes()[0].status, BikeStatus::Rented);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn rent_success_replaces_only_that_bike() {
    let mut state = loaded(vec![
        make_bike(1, BikeStatus::Available, None),
        make_bike(2, BikeStatus::Available, None),
        make_bike(3, BikeStatus::Rented, Some(8)),
    ]);
    let before = state.clone();
    assert!(state.begin_action(2, BikeAction::Rent));
    state.finish_action(Ok(make_bike(2, BikeStatus::Rented, Some(7))));

    let matching: Vec<&Bike> = state.bikes().iter().filter(|b| b.id == 2).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].status, BikeStatus::Rented);
    assert_eq!(state.bikes()[0], before.bikes()[0]);
    assert_eq!(state.bikes()[2], before.bikes()[2]);
    assert_eq!(state.pending, None);
}

#[test]
fn replace_is_noop_without_cache() {
    let mut state = BikesState::default();
    assert!(!state.replace_bike(make_bike(1, BikeStatus::Rented, Some(1))));
    assert_eq!(state.items, None);
}

#[test]
fn replace_appends_unknown_bike() {
    let mut state = loaded(vec![make_bike(1, BikeStatus::Available, None)]);
    assert!(state.replace_bike(make_bike(9, BikeStatus::Available, None)));
    assert_eq!(state.bikes().len(), 2);
    assert_eq!(state.bikes()[1].id, 9);
}

#[test]
fn second_action_rejected_while_pending() {
    let mut state = loaded(vec![make_bike(1, BikeStatus::Available, None)]);
    assert!(state.begin_action(1, BikeAction::Rent));
    assert!(!state.begin_action(1, BikeAction::Rent));
    assert_eq!(state.pending, Some((1, BikeAction::Rent)));
}

#[test]
fn failed_action_keeps_list_and_sets_error() {
    let mut state = loaded(vec![make_bike(1, BikeStatus::Available, None)]);
    let before = state.bikes().to_vec();
    state.begin_action(1, BikeAction::Rent);
    state.finish_action(Err(ApiError::Status {
        status: 400,
        message: "e4000 cannot rent because the bike is rented".to_owned(),
    }));
    assert_eq!(state.bikes(), before.as_slice());
    assert_eq!(state.error.as_deref(), Some("e4000 cannot rent because the bike is rented"));
    assert_eq!(state.pending, None);
}

#[test]
fn reset_returns_to_idle() {
    let mut state = loaded(vec![make_bike(1, BikeStatus::Available, None)]);
    state.reset();
    assert_eq!(state, BikesState::default());
}
