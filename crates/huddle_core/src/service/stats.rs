//! Board summary aggregation.
//!
//! # Invariants
//! - Counts are recomputed from the given slice on every call.
//! - Results do not depend on slice order.

use crate::model::reservation::{KitchenStats, Reservation, ReservationStats};
use crate::service::view::is_critical_allergy;

/// Computes front-of-house summary counts.
pub fn calculate_stats(reservations: &[Reservation]) -> ReservationStats {
    ReservationStats {
        total_reservations: reservations.len(),
        vip_count: reservations.iter().filter(|r| r.is_vip).count(),
        dietary_count: reservations
            .iter()
            .filter(|r| !r.dietary_restrictions.is_empty())
            .count(),
        celebration_count: reservations
            .iter()
            .filter(|r| r.special_occasion.is_some())
            .count(),
    }
}

/// Computes back-of-house counts.
///
/// A reservation counts once toward `severe_allergy_count` no matter how many
/// of its restrictions are severe allergies.
pub fn calculate_kitchen_stats(reservations: &[Reservation]) -> KitchenStats {
    KitchenStats {
        severe_allergy_count: reservations
            .iter()
            .filter(|r| r.dietary_restrictions.iter().any(|d| is_critical_allergy(d)))
            .count(),
        accessibility_count: reservations
            .iter()
            .filter(|r| r.accessibility.is_some())
            .count(),
    }
}
