use super::*;

// =============================================================
// Bike
// =============================================================

#[test]
fn bike_deserializes_server_payload() {
    let bike: Bike = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "henry",
        "lat": "50.119504",
        "long": "8.638137",
        "status": "rented",
        "userId": 7,
        "nameOfRenter": "Bob",
        "usernameOfRenter": "bob"
    }))
    .unwrap();
    assert_eq!(bike.id, 1);
    assert_eq!(bike.status, BikeStatus::Rented);
    assert_eq!(bike.user_id, Some(7));
    assert_eq!(bike.name_of_renter.as_deref(), Some("Bob"));
    assert_eq!(bike.username_of_renter.as_deref(), Some("bob"));
}

#[test]
fn bike_zero_user_id_means_no_renter() {
    let bike: Bike = serde_json::from_value(serde_json::json!({
        "id": 2,
        "name": "",
        "lat": "50.1",
        "long": "8.6",
        "status": "available",
        "userId": 0,
        "nameOfRenter": ""
    }))
    .unwrap();
    assert_eq!(bike.user_id, None);
    assert_eq!(bike.name_of_renter, None);
    assert!(bike.is_available());
}

#[test]
fn bike_accepts_numeric_coordinates() {
    let bike: Bike = serde_json::from_value(serde_json::json!({
        "id": 3,
        "lat": 50.5,
        "long": 8.25,
        "status": "available"
    }))
    .unwrap();
    assert_eq!(bike.position(), Some(LatLng { lat: 50.5, lng: 8.25 }));
}

#[test]
fn bike_rejects_unknown_status() {
    let result = serde_json::from_value::<Bike>(serde_json::json!({
        "id": 3,
        "lat": "1",
        "long": "2",
        "status": "stolen"
    }));
    assert!(result.is_err());
}

#[test]
fn bike_list_tolerates_null_and_missing_coordinates() {
    let bikes: Vec<Bike> = serde_json::from_value(serde_json::json!([
        { "id": 1, "lat": "50.11", "long": "8.63", "status": "available" },
        { "id": 2, "lat": null, "status": "available" }
    ]))
    .unwrap();
    assert_eq!(bikes.len(), 2);
    assert_eq!(bikes[1].lat, "");
    assert_eq!(bikes[1].long, "");
    assert_eq!(bikes[1].position(), None);

    let specs = crate::map::markers::plan_markers(&bikes, None);
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].bike_id, 1);
}

#[test]
fn held_bike_finds_first_renter_match() {
    let bikes: Vec<Bike> = serde_json::from_value(serde_json::json!([
        { "id": 1, "lat": "1", "long": "2", "status": "available" },
        { "id": 2, "lat": "1", "long": "2", "status": "rented", "userId": 7 }
    ]))
    .unwrap();
    assert_eq!(held_bike(&bikes, 7).map(|b| b.id), Some(2));
    assert!(held_bike(&bikes, 8).is_none());
}

#[test]
fn bike_position_none_for_garbage_coordinates() {
    let bike = Bike {
        id: 1,
        name: String::new(),
        lat: "north".to_owned(),
        long: "8.6".to_owned(),
        status: BikeStatus::Available,
        user_id: None,
        name_of_renter: None,
        username_of_renter: None,
    };
    assert_eq!(bike.position(), None);
}

#[test]
fn bike_is_held_by_matches_renter() {
    let bike: Bike = serde_json::from_value(serde_json::json!({
        "id": 4, "lat": "1", "long": "2", "status": "rented", "userId": 9
    }))
    .unwrap();
    assert!(bike.is_held_by(9));
    assert!(!bike.is_held_by(10));
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn credentials_read_camel_case_token() {
    let creds: Credentials = serde_json::from_str(r#"{"accessToken":"abc.def.ghi"}"#).unwrap();
    assert_eq!(creds.access_token, "abc.def.ghi");
}

#[test]
fn register_request_serializes_all_fields() {
    let body = RegisterRequest {
        username: "bob".to_owned(),
        password: "pw".to_owned(),
        name: "Bob".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "username": "bob", "password": "pw", "name": "Bob" })
    );
}

#[test]
fn user_defaults_permissions_and_exp() {
    let user: User = serde_json::from_str(r#"{"id":1,"name":"Ann","username":"ann"}"#).unwrap();
    assert!(user.permissions.is_empty());
    assert_eq!(user.exp, None);
}

#[test]
fn user_null_permissions_become_empty() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"name":"Ann","username":"ann","permissions":null}"#).unwrap();
    assert!(user.permissions.is_empty());
}

#[test]
fn user_initial_prefers_name() {
    let user = User {
        id: 1,
        name: "ann".to_owned(),
        username: "zed".to_owned(),
        permissions: Vec::new(),
        exp: None,
    };
    assert_eq!(user.initial(), "A");
}

#[test]
fn bike_action_path_segments() {
    assert_eq!(BikeAction::Rent.path_segment(), "rent");
    assert_eq!(BikeAction::Return.path_segment(), "return");
}
