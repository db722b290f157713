use huddle_core::{transform_profile, transform_profiles, RawProfile, PLACEHOLDER_TIME};

fn profile(name: &str) -> RawProfile {
    RawProfile::new(name, "2025-07-31", 2)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn batch_keeps_length_and_order_with_positional_ids() {
    let batch = vec![profile("Ada"), profile("Grace"), profile("Linus")];

    let reservations = transform_profiles(&batch);
    assert_eq!(reservations.len(), 3);
    for (index, reservation) in reservations.iter().enumerate() {
        assert_eq!(reservation.id as usize, index + 1);
        assert_eq!(reservation.guest_name, batch[index].name);
    }
}

#[test]
fn empty_batch_transforms_to_empty_output() {
    assert!(transform_profiles(&[]).is_empty());
}

#[test]
fn time_is_placeholder_regardless_of_date() {
    let mut source = profile("Ada");
    source.date = "2031-12-24".to_string();

    let reservation = transform_profile(&source, 0);
    assert_eq!(reservation.time, PLACEHOLDER_TIME);
    assert_eq!(reservation.time, "5:30 PM");
}

#[test]
fn vip_priority_without_requests_is_vip() {
    let mut source = profile("Ada");
    source.priority = "VIP".to_string();

    assert!(transform_profile(&source, 0).is_vip);
}

#[test]
fn vip_keyword_in_request_is_case_insensitive() {
    let mut source = profile("Ada");
    source.priority = "Standard".to_string();
    source.special_requests = strings(&["Please reserve VIP parking"]);
    assert!(transform_profile(&source, 0).is_vip);

    source.special_requests = strings(&["PRIVATE dining room"]);
    assert!(transform_profile(&source, 0).is_vip);
}

#[test]
fn ordinary_requests_are_not_vip() {
    let mut source = profile("Ada");
    source.priority = "Standard".to_string();
    source.special_requests = strings(&["window seat"]);

    assert!(!transform_profile(&source, 0).is_vip);
}

#[test]
fn vip_priority_match_is_exact() {
    let mut source = profile("Ada");
    source.priority = "vip".to_string();

    assert!(!transform_profile(&source, 0).is_vip);
}

#[test]
fn dietary_merge_drops_sentinels_and_keeps_sublist_order() {
    let mut source = profile("Ada");
    source.dietary_restrictions = strings(&["Vegetarian", "None", "", "Gluten-free"]);
    source.allergies = strings(&["None", "Shellfish", "", "Peanuts"]);

    let reservation = transform_profile(&source, 0);
    assert_eq!(
        reservation.dietary_restrictions,
        strings(&["Vegetarian", "Gluten-free", "Shellfish", "Peanuts"])
    );
    assert!(!reservation.dietary_restrictions.iter().any(|d| d == "None"));
    assert!(!reservation.dietary_restrictions.iter().any(|d| d.is_empty()));
}

#[test]
fn only_sentinels_produce_empty_restrictions() {
    let mut source = profile("Ada");
    source.dietary_restrictions = strings(&["None"]);
    source.allergies = strings(&["None", ""]);

    assert!(transform_profile(&source, 0).dietary_restrictions.is_empty());
}

#[test]
fn special_occasion_is_none_when_empty() {
    let mut source = profile("Ada");
    assert_eq!(transform_profile(&source, 0).special_occasion, None);

    source.special_occasion = "Anniversary".to_string();
    assert_eq!(
        transform_profile(&source, 0).special_occasion.as_deref(),
        Some("Anniversary")
    );
}

#[test]
fn accessibility_keeps_first_matching_request_verbatim() {
    let mut source = profile("Ada");
    source.special_requests = strings(&["wheelchair access needed", "birthday cake"]);
    assert_eq!(
        transform_profile(&source, 0).accessibility.as_deref(),
        Some("wheelchair access needed")
    );

    source.special_requests = strings(&["corner table", "Uses a CANE", "Step-free route"]);
    assert_eq!(
        transform_profile(&source, 0).accessibility.as_deref(),
        Some("Uses a CANE")
    );

    source.special_requests = strings(&["corner table"]);
    assert_eq!(transform_profile(&source, 0).accessibility, None);
}

#[test]
fn special_requests_join_with_comma_space() {
    let mut source = profile("Ada");
    assert_eq!(transform_profile(&source, 0).special_requests, "");

    source.special_requests = strings(&["quiet table", "champagne on arrival"]);
    assert_eq!(
        transform_profile(&source, 0).special_requests,
        "quiet table, champagne on arrival"
    );
}

#[test]
fn staff_notes_feed_history_and_kitchen_notes() {
    let mut source = profile("Ada");
    source.staff_notes = "Regular since 2019. Prefers window tables.".to_string();
    source.conversation = strings(&["Travel", "Art"]);

    let reservation = transform_profile(&source, 4);
    assert_eq!(reservation.id, 5);
    assert_eq!(reservation.guest_history, source.staff_notes);
    assert_eq!(reservation.kitchen_notes, source.staff_notes);
    assert_eq!(reservation.conversation_starters, source.conversation);
    assert_eq!(reservation.party_size, 2);
}

#[test]
fn reservation_serializes_with_camel_case_and_nulls() {
    let reservation = transform_profile(&profile("Ada"), 0);
    let json = serde_json::to_value(&reservation).unwrap();

    assert_eq!(json["guestName"], "Ada");
    assert_eq!(json["isVip"], false);
    assert!(json["specialOccasion"].is_null());
    assert!(json["accessibility"].is_null());
    assert_eq!(json["specialRequests"], "");
}
