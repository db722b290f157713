//! Profile-to-reservation transform.
//!
//! # Responsibility
//! - Map one upstream profile into one reservation view model.
//! - Classify VIP status and accessibility needs by keyword matching.
//!
//! # Invariants
//! - Output length and order always match input length and order.
//! - The transform is total: it never fails for a decoded profile.
//! - Ids are `index + 1`, unique for batches below `u32::MAX` profiles. Larger
//!   indexes saturate at `u32::MAX`.

use crate::model::profile::{RawProfile, PRIORITY_VIP, SENTINEL_NONE};
use crate::model::reservation::Reservation;

/// Display time used for every reservation until upstream times are wired in.
pub const PLACEHOLDER_TIME: &str = "5:30 PM";

const VIP_REQUEST_KEYWORDS: &[&str] = &["vip", "private"];
const ACCESSIBILITY_KEYWORDS: &[&str] = &["wheelchair", "accessibility", "cane", "step-free"];
const SPECIAL_REQUEST_SEPARATOR: &str = ", ";

/// Transforms one profile at zero-based `index` of its batch.
pub fn transform_profile(profile: &RawProfile, index: usize) -> Reservation {
    let dietary_restrictions = profile
        .dietary_restrictions
        .iter()
        .chain(profile.allergies.iter())
        .filter(|value| is_present(value))
        .cloned()
        .collect();

    Reservation {
        id: positional_id(index),
        guest_name: profile.name.clone(),
        party_size: profile.people,
        time: PLACEHOLDER_TIME.to_string(),
        is_vip: is_vip(profile),
        dietary_restrictions,
        special_occasion: non_empty(&profile.special_occasion),
        accessibility: first_accessibility_request(&profile.special_requests),
        guest_history: profile.staff_notes.clone(),
        conversation_starters: profile.conversation.clone(),
        special_requests: profile.special_requests.join(SPECIAL_REQUEST_SEPARATOR),
        kitchen_notes: profile.staff_notes.clone(),
    }
}

/// Transforms a whole batch, assigning ids by position.
pub fn transform_profiles(profiles: &[RawProfile]) -> Vec<Reservation> {
    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| transform_profile(profile, index))
        .collect()
}

fn is_vip(profile: &RawProfile) -> bool {
    profile.priority == PRIORITY_VIP
        || profile
            .special_requests
            .iter()
            .any(|request| contains_any_keyword(request, VIP_REQUEST_KEYWORDS))
}

fn first_accessibility_request(requests: &[String]) -> Option<String> {
    requests
        .iter()
        .find(|request| contains_any_keyword(request, ACCESSIBILITY_KEYWORDS))
        .cloned()
}

fn contains_any_keyword(value: &str, keywords: &[&str]) -> bool {
    let lowered = value.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

fn is_present(value: &str) -> bool {
    !value.is_empty() && value != SENTINEL_NONE
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn positional_id(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
