//! Per-audience guest projections.
//!
//! # Responsibility
//! - Derive alert flags, titles and summaries shown on guest cards.
//! - Derive the ordered detail sections for one guest.
//!
//! # Invariants
//! - Projections are pure functions of one reservation and a view mode.
//! - Keyword checks are case-insensitive substring matches.

use crate::model::reservation::{FilterType, Reservation, ViewMode};
use serde::Serialize;

/// Party size from which a table is flagged as a large party.
pub const LARGE_PARTY_THRESHOLD: u32 = 6;

const ALLERGY_KEYWORD: &str = "allergy";
const SEVERE_KEYWORD: &str = "severe";
const ALERTING_OCCASION: &str = "Proposal";
const NO_KITCHEN_REQUIREMENTS: &str = "No special kitchen requirements";
const EMPTY_FILTER_MESSAGE: &str = "No reservations match the current filter.";

/// One dietary badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionBadge {
    pub label: String,
    /// Allergy or severe restriction; rendered as an alert.
    pub alert: bool,
}

/// Card-level projection of one reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCard {
    pub id: u32,
    pub title: String,
    pub time: String,
    pub party_label: String,
    pub summary: String,
    pub is_vip: bool,
    pub has_alerts: bool,
    /// Only set on the back-of-house board.
    pub critical: bool,
    pub large_party: bool,
    pub restrictions: Vec<RestrictionBadge>,
    pub special_occasion: Option<String>,
    pub has_accessibility: bool,
}

/// One titled block of the guest detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
    pub emphasized: bool,
}

/// Detail projection of one reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDetail {
    pub id: u32,
    pub title: String,
    pub time: String,
    pub party_label: String,
    pub has_alerts: bool,
    pub critical: bool,
    pub sections: Vec<DetailSection>,
}

/// Returns whether one restriction should be highlighted.
pub fn restriction_needs_alert(restriction: &str) -> bool {
    let lowered = restriction.to_lowercase();
    lowered.contains(ALLERGY_KEYWORD) || lowered.contains(SEVERE_KEYWORD)
}

/// Returns whether one restriction is a severe allergy.
pub fn is_critical_allergy(restriction: &str) -> bool {
    let lowered = restriction.to_lowercase();
    lowered.contains(ALLERGY_KEYWORD) && lowered.contains(SEVERE_KEYWORD)
}

pub fn has_critical_allergy(reservation: &Reservation) -> bool {
    reservation
        .dietary_restrictions
        .iter()
        .any(|r| is_critical_allergy(r))
}

/// Returns whether the card carries an alert marker in either view.
pub fn has_alerts(reservation: &Reservation) -> bool {
    reservation
        .dietary_restrictions
        .iter()
        .any(|r| restriction_needs_alert(r))
        || reservation.accessibility.is_some()
        || reservation.special_occasion.as_deref() == Some(ALERTING_OCCASION)
}

pub fn is_large_party(reservation: &Reservation) -> bool {
    reservation.party_size >= LARGE_PARTY_THRESHOLD
}

/// Builds the card projection for `view_mode`.
pub fn guest_card(reservation: &Reservation, view_mode: ViewMode) -> GuestCard {
    let back = view_mode.is_back_of_house();
    let title = if back {
        format!("Table - {}", reservation.guest_name)
    } else {
        reservation.guest_name.clone()
    };
    let summary = if back {
        or_fallback(&reservation.kitchen_notes, NO_KITCHEN_REQUIREMENTS)
    } else {
        or_fallback(&reservation.special_requests, &reservation.guest_history)
    };

    GuestCard {
        id: reservation.id,
        title,
        time: reservation.time.clone(),
        party_label: party_label(reservation.party_size, view_mode),
        summary,
        is_vip: reservation.is_vip,
        has_alerts: has_alerts(reservation),
        critical: back && has_critical_allergy(reservation),
        large_party: is_large_party(reservation),
        restrictions: restriction_badges(reservation),
        special_occasion: reservation.special_occasion.clone(),
        has_accessibility: reservation.accessibility.is_some(),
    }
}

/// Builds the detail projection for `view_mode`.
pub fn guest_detail(reservation: &Reservation, view_mode: ViewMode) -> GuestDetail {
    let critical = has_critical_allergy(reservation);
    let (title, sections) = if view_mode.is_back_of_house() {
        (
            format!("Kitchen Notes - {}", reservation.guest_name),
            kitchen_sections(reservation, critical),
        )
    } else {
        (reservation.guest_name.clone(), guest_sections(reservation))
    };

    GuestDetail {
        id: reservation.id,
        title,
        time: reservation.time.clone(),
        party_label: party_label(reservation.party_size, view_mode),
        has_alerts: has_alerts(reservation),
        critical: critical && view_mode.is_back_of_house(),
        sections,
    }
}

/// Heading for the reservation list, with a count suffix while filtered.
pub fn board_heading(view_mode: ViewMode, filter: FilterType, shown: usize, total: usize) -> String {
    let base = if view_mode.is_back_of_house() {
        "Kitchen Prep Notes"
    } else {
        "Tonight's Reservations"
    };
    if filter == FilterType::All {
        base.to_string()
    } else {
        format!("{base} ({shown} of {total})")
    }
}

/// Message shown when a non-`All` filter matches nothing.
pub fn empty_filter_message(filter: FilterType, shown: usize) -> Option<&'static str> {
    (filter != FilterType::All && shown == 0).then_some(EMPTY_FILTER_MESSAGE)
}

fn party_label(party_size: u32, view_mode: ViewMode) -> String {
    let unit = if view_mode.is_back_of_house() {
        "covers"
    } else {
        "guests"
    };
    format!("{party_size} {unit}")
}

fn restriction_badges(reservation: &Reservation) -> Vec<RestrictionBadge> {
    reservation
        .dietary_restrictions
        .iter()
        .map(|label| RestrictionBadge {
            label: label.clone(),
            alert: restriction_needs_alert(label),
        })
        .collect()
}

fn kitchen_sections(reservation: &Reservation, critical: bool) -> Vec<DetailSection> {
    let mut sections = Vec::new();
    if !reservation.kitchen_notes.is_empty() {
        sections.push(DetailSection {
            heading: "Kitchen Preparation Notes",
            lines: vec![reservation.kitchen_notes.clone()],
            emphasized: critical,
        });
    }
    if let Some(section) = dietary_section(reservation, "ALERT KITCHEN STAFF") {
        sections.push(section);
    }
    if !reservation.special_requests.is_empty() {
        sections.push(DetailSection {
            heading: "Service Coordination",
            lines: vec![reservation.special_requests.clone()],
            emphasized: false,
        });
    }
    sections
}

fn guest_sections(reservation: &Reservation) -> Vec<DetailSection> {
    let mut sections = vec![DetailSection {
        heading: "Guest History",
        lines: vec![reservation.guest_history.clone()],
        emphasized: false,
    }];
    if !reservation.conversation_starters.is_empty() {
        sections.push(DetailSection {
            heading: "Conversation Topics",
            lines: reservation.conversation_starters.clone(),
            emphasized: false,
        });
    }
    if !reservation.special_requests.is_empty() {
        sections.push(DetailSection {
            heading: "Special Requests",
            lines: vec![reservation.special_requests.clone()],
            emphasized: false,
        });
    }
    if let Some(section) = dietary_section(reservation, "CRITICAL") {
        sections.push(section);
    }
    if let Some(accessibility) = &reservation.accessibility {
        sections.push(DetailSection {
            heading: "Accessibility Requirements",
            lines: vec![accessibility.clone()],
            emphasized: false,
        });
    }
    sections
}

fn dietary_section(reservation: &Reservation, alert_marker: &str) -> Option<DetailSection> {
    if reservation.dietary_restrictions.is_empty() {
        return None;
    }
    let lines = reservation
        .dietary_restrictions
        .iter()
        .map(|restriction| {
            if restriction_needs_alert(restriction) {
                format!("{restriction} [{alert_marker}]")
            } else {
                restriction.clone()
            }
        })
        .collect::<Vec<_>>();
    let emphasized = reservation
        .dietary_restrictions
        .iter()
        .any(|r| restriction_needs_alert(r));
    Some(DetailSection {
        heading: "Dietary Requirements",
        lines,
        emphasized,
    })
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
