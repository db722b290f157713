//! Plain-text rendering for terminal output.

use huddle_core::service::view::{board_heading, empty_filter_message};
use huddle_core::{
    guest_card, FilterType, GuestCard, GuestDetail, KitchenStats, Reservation, ReservationStats,
    ViewMode,
};
use std::fmt::Write;

pub fn board(
    selected: &[&Reservation],
    total: usize,
    view_mode: ViewMode,
    filter: FilterType,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        board_heading(view_mode, filter, selected.len(), total)
    );
    if let Some(message) = empty_filter_message(filter, selected.len()) {
        let _ = writeln!(out, "{message}");
        return out;
    }
    for reservation in selected {
        out.push_str(&card(&guest_card(reservation, view_mode)));
    }
    out
}

fn card(card: &GuestCard) -> String {
    let mut markers = Vec::new();
    if card.is_vip {
        markers.push("VIP");
    }
    if card.critical {
        markers.push("CRITICAL");
    } else if card.has_alerts {
        markers.push("ALERT");
    }
    if card.large_party {
        markers.push("LARGE PARTY");
    }
    if card.has_accessibility {
        markers.push("ACCESSIBILITY");
    }

    let mut out = String::new();
    let _ = write!(
        out,
        "\n#{} {} | {} | {}",
        card.id, card.title, card.time, card.party_label
    );
    if !markers.is_empty() {
        let _ = write!(out, " [{}]", markers.join(", "));
    }
    out.push('\n');
    if let Some(occasion) = &card.special_occasion {
        let _ = writeln!(out, "  occasion: {occasion}");
    }
    if !card.restrictions.is_empty() {
        let badges = card
            .restrictions
            .iter()
            .map(|badge| {
                if badge.alert {
                    format!("{}!", badge.label)
                } else {
                    badge.label.clone()
                }
            })
            .collect::<Vec<_>>();
        let _ = writeln!(out, "  dietary: {}", badges.join(", "));
    }
    if !card.summary.is_empty() {
        let _ = writeln!(out, "  {}", card.summary);
    }
    out
}

pub fn stats(stats: &ReservationStats, kitchen: &KitchenStats) -> String {
    format!(
        "total={} vip={} dietary={} celebrations={} severe_allergies={} accessibility={}\n",
        stats.total_reservations,
        stats.vip_count,
        stats.dietary_count,
        stats.celebration_count,
        kitchen.severe_allergy_count,
        kitchen.accessibility_count
    )
}

pub fn detail(detail: &GuestDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | {} | {}",
        detail.title, detail.time, detail.party_label
    );
    for section in &detail.sections {
        let marker = if section.emphasized { " (!)" } else { "" };
        let _ = writeln!(out, "\n{}{marker}", section.heading);
        for line in &section.lines {
            let _ = writeln!(out, "  - {line}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{board, detail, stats};
    use huddle_core::{
        calculate_kitchen_stats, calculate_stats, guest_detail, transform_profiles, FilterType,
        RawProfile, ViewMode,
    };

    fn reservations() -> Vec<huddle_core::Reservation> {
        let mut vip = RawProfile::new("Sarah Thompson", "2025-07-31", 8);
        vip.priority = "VIP".to_string();
        vip.allergies = vec!["Shellfish allergy - severe".to_string()];
        vip.staff_notes = "Separate prep station.".to_string();
        let plain = RawProfile::new("Lee Park", "2025-07-31", 2);
        transform_profiles(&[vip, plain])
    }

    #[test]
    fn board_lists_cards_with_markers() {
        let all = reservations();
        let selected = all.iter().collect::<Vec<_>>();
        let text = board(&selected, all.len(), ViewMode::BackOfHouse, FilterType::All);

        assert!(text.starts_with("Kitchen Prep Notes\n"));
        assert!(text.contains(
            "#1 Table - Sarah Thompson | 5:30 PM | 8 covers [VIP, CRITICAL, LARGE PARTY]"
        ));
        assert!(text.contains("dietary: Shellfish allergy - severe!"));
        assert!(text.contains("#2 Table - Lee Park"));
    }

    #[test]
    fn board_prints_empty_message_when_filter_hides_everything() {
        let all = reservations();
        let text = board(&[], all.len(), ViewMode::FrontOfHouse, FilterType::Celebrations);
        assert_eq!(
            text,
            "Tonight's Reservations (0 of 2)\nNo reservations match the current filter.\n"
        );
    }

    #[test]
    fn stats_line_includes_kitchen_counts() {
        let all = reservations();
        let line = stats(&calculate_stats(&all), &calculate_kitchen_stats(&all));
        assert_eq!(
            line,
            "total=2 vip=1 dietary=1 celebrations=0 severe_allergies=1 accessibility=0\n"
        );
    }

    #[test]
    fn detail_marks_emphasized_sections() {
        let all = reservations();
        let text = detail(&guest_detail(&all[0], ViewMode::BackOfHouse));
        assert!(text.starts_with("Kitchen Notes - Sarah Thompson | 5:30 PM | 8 covers\n"));
        assert!(text.contains("Kitchen Preparation Notes (!)"));
        assert!(text.contains("  - Shellfish allergy - severe [ALERT KITCHEN STAFF]"));
    }
}
