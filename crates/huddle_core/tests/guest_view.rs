use huddle_core::service::view::{board_heading, empty_filter_message, has_alerts};
use huddle_core::{guest_card, guest_detail, transform_profile, FilterType, RawProfile, ViewMode};

fn emma() -> RawProfile {
    let mut profile = RawProfile::new("Emma Rodriguez", "2025-07-31", 6);
    profile.priority = "VIP".to_string();
    profile.dietary_restrictions = vec!["Vegetarian".to_string()];
    profile.allergies = vec!["Nut allergy - severe".to_string()];
    profile.special_occasion = "Birthday".to_string();
    profile.special_requests = vec!["Birthday cake with candles".to_string()];
    profile.staff_notes = "Clean all prep surfaces.".to_string();
    profile.conversation = vec!["Wine enthusiast".to_string()];
    profile
}

#[test]
fn back_of_house_card_flags_critical_allergy() {
    let reservation = transform_profile(&emma(), 0);
    let card = guest_card(&reservation, ViewMode::BackOfHouse);

    assert_eq!(card.title, "Table - Emma Rodriguez");
    assert_eq!(card.party_label, "6 covers");
    assert_eq!(card.summary, "Clean all prep surfaces.");
    assert!(card.has_alerts);
    assert!(card.critical);
    assert!(card.large_party);
    assert!(!card.restrictions[0].alert);
    assert!(card.restrictions[1].alert);
}

#[test]
fn front_of_house_card_never_marks_critical() {
    let reservation = transform_profile(&emma(), 0);
    let card = guest_card(&reservation, ViewMode::FrontOfHouse);

    assert_eq!(card.title, "Emma Rodriguez");
    assert_eq!(card.party_label, "6 guests");
    assert_eq!(card.summary, "Birthday cake with candles");
    assert!(card.has_alerts);
    assert!(!card.critical);
}

#[test]
fn card_summaries_fall_back_when_empty() {
    let mut profile = RawProfile::new("David", "2025-07-31", 2);
    profile.staff_notes = "First-time guest.".to_string();
    let reservation = transform_profile(&profile, 0);
    assert_eq!(
        guest_card(&reservation, ViewMode::FrontOfHouse).summary,
        "First-time guest."
    );

    let bare = transform_profile(&RawProfile::new("Lee", "2025-07-31", 2), 0);
    assert_eq!(
        guest_card(&bare, ViewMode::BackOfHouse).summary,
        "No special kitchen requirements"
    );
}

#[test]
fn proposal_and_accessibility_raise_alerts() {
    let mut profile = RawProfile::new("David", "2025-07-31", 2);
    profile.special_occasion = "Proposal".to_string();
    assert!(has_alerts(&transform_profile(&profile, 0)));

    let mut profile = RawProfile::new("Michael", "2025-07-31", 2);
    profile.special_requests = vec!["wheelchair access".to_string()];
    assert!(has_alerts(&transform_profile(&profile, 0)));

    let plain = RawProfile::new("Lee", "2025-07-31", 2);
    assert!(!has_alerts(&transform_profile(&plain, 0)));
}

#[test]
fn kitchen_detail_orders_sections_and_marks_alerts() {
    let reservation = transform_profile(&emma(), 0);
    let detail = guest_detail(&reservation, ViewMode::BackOfHouse);

    assert_eq!(detail.title, "Kitchen Notes - Emma Rodriguez");
    let headings = detail.sections.iter().map(|s| s.heading).collect::<Vec<_>>();
    assert_eq!(
        headings,
        vec![
            "Kitchen Preparation Notes",
            "Dietary Requirements",
            "Service Coordination"
        ]
    );
    assert!(detail.sections[0].emphasized);
    assert_eq!(
        detail.sections[1].lines,
        vec![
            "Vegetarian".to_string(),
            "Nut allergy - severe [ALERT KITCHEN STAFF]".to_string()
        ]
    );
}

#[test]
fn guest_detail_lists_front_of_house_sections() {
    let mut profile = emma();
    profile.special_requests.push("Step-free entrance".to_string());
    let reservation = transform_profile(&profile, 0);
    let detail = guest_detail(&reservation, ViewMode::FrontOfHouse);

    let headings = detail.sections.iter().map(|s| s.heading).collect::<Vec<_>>();
    assert_eq!(
        headings,
        vec![
            "Guest History",
            "Conversation Topics",
            "Special Requests",
            "Dietary Requirements",
            "Accessibility Requirements"
        ]
    );
    assert!(!detail.critical);
    assert_eq!(detail.sections[4].lines, vec!["Step-free entrance".to_string()]);
}

#[test]
fn board_heading_adds_count_only_when_filtered() {
    assert_eq!(
        board_heading(ViewMode::FrontOfHouse, FilterType::All, 5, 5),
        "Tonight's Reservations"
    );
    assert_eq!(
        board_heading(ViewMode::BackOfHouse, FilterType::Dietary, 2, 5),
        "Kitchen Prep Notes (2 of 5)"
    );
    assert_eq!(empty_filter_message(FilterType::All, 0), None);
    assert!(empty_filter_message(FilterType::Vip, 0).is_some());
}
