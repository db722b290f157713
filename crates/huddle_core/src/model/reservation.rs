//! Reservation view model and board selectors.
//!
//! # Responsibility
//! - Define the normalized record rendered by both huddle boards.
//! - Define the closed filter and view-mode vocabularies.
//!
//! # Invariants
//! - `dietary_restrictions` never contains `"None"` or empty entries.
//! - `special_occasion` and `accessibility` are `None`, never `Some("")`.
//! - `id` is unique inside one batch only.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Normalized, UI-ready reservation.
///
/// Serialized in camelCase to match the board's data contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Position in the fetched batch plus one. Not stable across fetches.
    pub id: u32,
    pub guest_name: String,
    pub party_size: u32,
    /// Display time. Currently the same placeholder for every reservation.
    pub time: String,
    pub is_vip: bool,
    /// Dietary restrictions followed by allergies.
    pub dietary_restrictions: Vec<String>,
    pub special_occasion: Option<String>,
    /// First special request mentioning an accessibility keyword, verbatim.
    pub accessibility: Option<String>,
    pub guest_history: String,
    pub conversation_starters: Vec<String>,
    /// Special requests joined with `", "`.
    pub special_requests: String,
    pub kitchen_notes: String,
}

/// Front-of-house summary counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStats {
    pub total_reservations: usize,
    pub vip_count: usize,
    pub dietary_count: usize,
    pub celebration_count: usize,
}

/// Back-of-house counts that complement [`ReservationStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenStats {
    pub severe_allergy_count: usize,
    pub accessibility_count: usize,
}

/// Active board filter category.
///
/// Deserialization is fail-open: unknown labels become `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FilterType {
    #[default]
    All,
    Vip,
    Dietary,
    Celebrations,
}

impl FilterType {
    /// Stable wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Vip => "vip",
            Self::Dietary => "dietary",
            Self::Celebrations => "celebrations",
        }
    }

    /// Parses an exact filter label, falling back to `All` for anything else.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "vip" => Self::Vip,
            "dietary" => Self::Dietary,
            "celebrations" => Self::Celebrations,
            _ => Self::All,
        }
    }
}

impl From<String> for FilterType {
    fn from(value: String) -> Self {
        Self::parse_lenient(value.as_str())
    }
}

impl From<&str> for FilterType {
    fn from(value: &str) -> Self {
        Self::parse_lenient(value)
    }
}

impl Display for FilterType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board audience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Guest-relations context.
    #[default]
    FrontOfHouse,
    /// Kitchen-preparation context.
    BackOfHouse,
}

impl ViewMode {
    /// Stable wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FrontOfHouse => "front-of-house",
            Self::BackOfHouse => "back-of-house",
        }
    }

    /// Parses a view-mode label. Accepts short `front|back|foh|boh` aliases.
    pub fn parse(value: &str) -> Result<Self, ViewModeParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "front-of-house" | "front" | "foh" => Ok(Self::FrontOfHouse),
            "back-of-house" | "back" | "boh" | "kitchen" => Ok(Self::BackOfHouse),
            other => Err(ViewModeParseError(other.to_string())),
        }
    }

    pub fn is_back_of_house(self) -> bool {
        self == Self::BackOfHouse
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown view-mode label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeParseError(pub String);

impl Display for ViewModeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported view mode `{}`; expected front-of-house|back-of-house",
            self.0
        )
    }
}

impl Error for ViewModeParseError {}

#[cfg(test)]
mod tests {
    use super::{FilterType, ViewMode};

    #[test]
    fn filter_labels_fail_open_to_all() {
        assert_eq!(FilterType::parse_lenient("vip"), FilterType::Vip);
        assert_eq!(FilterType::parse_lenient("dietary"), FilterType::Dietary);
        assert_eq!(FilterType::parse_lenient("VIP"), FilterType::All);
        assert_eq!(FilterType::parse_lenient(" dietary "), FilterType::All);
        assert_eq!(FilterType::parse_lenient("allergies"), FilterType::All);
        assert_eq!(FilterType::parse_lenient(""), FilterType::All);
    }

    #[test]
    fn filter_deserializes_unknown_labels_as_all() {
        let filter: FilterType = serde_json::from_str("\"birthdays\"").unwrap();
        assert_eq!(filter, FilterType::All);
        let filter: FilterType = serde_json::from_str("\"celebrations\"").unwrap();
        assert_eq!(filter, FilterType::Celebrations);
        assert_eq!(
            serde_json::to_string(&FilterType::Celebrations).unwrap(),
            "\"celebrations\""
        );
    }

    #[test]
    fn view_mode_uses_kebab_case_labels() {
        assert_eq!(
            serde_json::to_string(&ViewMode::BackOfHouse).unwrap(),
            "\"back-of-house\""
        );
        assert_eq!(ViewMode::parse("BOH").unwrap(), ViewMode::BackOfHouse);
        assert!(ViewMode::parse("bar").is_err());
    }
}
