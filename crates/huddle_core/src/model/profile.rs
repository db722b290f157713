//! Upstream guest profile schema.
//!
//! # Responsibility
//! - Mirror the insights endpoint wire shape field by field.
//! - Report record-level issues of one decoded profile without dropping it.
//!
//! # Invariants
//! - Wire field `special_occassion` keeps its upstream spelling; `null` decodes
//!   as the empty string.
//! - The literal `"None"` inside list fields is a sentinel, not a value.
//! - Only schema mismatches reject a record. Other issues are flagged and the
//!   record is kept.
//! - Envelope summary counts never fail a decode.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Upstream placeholder meaning "no value".
pub const SENTINEL_NONE: &str = "None";

/// Priority label that marks a guest as VIP outright.
pub const PRIORITY_VIP: &str = "VIP";

/// One guest profile as produced by the insights generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    /// Guest display name.
    pub name: String,
    /// Visit date, `YYYY-MM-DD` upstream. Not consumed by the transform.
    pub date: String,
    /// Party size.
    pub people: u32,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    /// Free text, empty when there is no occasion.
    #[serde(
        rename = "special_occassion",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub special_occasion: String,
    /// `VIP|Regular|First-time` upstream, but any string is accepted.
    pub priority: String,
    pub special_requests: Vec<String>,
    pub staff_notes: String,
    pub conversation: Vec<String>,
}

impl RawProfile {
    /// Creates a profile with empty context fields and `Regular` priority.
    ///
    /// Mirrors the upstream fallback profile shape.
    pub fn new(name: impl Into<String>, date: impl Into<String>, people: u32) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            people,
            dietary_restrictions: Vec::new(),
            allergies: Vec::new(),
            special_occasion: String::new(),
            priority: "Regular".to_string(),
            special_requests: Vec::new(),
            staff_notes: String::new(),
            conversation: Vec::new(),
        }
    }

    /// Lists record-level issues worth flagging; empty for a clean record.
    ///
    /// The board still shows flagged records.
    pub fn issues(&self) -> Vec<ProfileValidationError> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ProfileValidationError::BlankName);
        }
        if self.people == 0 {
            issues.push(ProfileValidationError::EmptyParty);
        }
        if !self.has_iso_date() {
            issues.push(ProfileValidationError::UnrecognizedDate);
        }
        issues
    }

    /// Returns whether `date` has the upstream `YYYY-MM-DD` shape.
    pub fn has_iso_date(&self) -> bool {
        ISO_DATE_RE.is_match(self.date.trim())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes any JSON value, keeping it only when it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Record-level issues for one upstream profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    BlankName,
    EmptyParty,
    /// `date` is not `YYYY-MM-DD`.
    UnrecognizedDate,
    /// The record does not match the wire schema at all.
    Schema(String),
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "profile name must not be blank"),
            Self::EmptyParty => write!(f, "profile party size must be at least 1"),
            Self::UnrecognizedDate => write!(f, "profile date is not YYYY-MM-DD"),
            Self::Schema(message) => write!(f, "profile does not match schema: {message}"),
        }
    }
}

impl Error for ProfileValidationError {}

/// Summary header of the insights envelope.
///
/// These counts are computed upstream and are informational only; the board
/// always recomputes its own statistics from the profiles. A missing or
/// mistyped field decodes as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeSummary {
    #[serde(deserialize_with = "lenient")]
    pub generated_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub total_reservations: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub vip_count: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub dietary_count: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub special_occasion_count: Option<u32>,
}

/// One upstream profile with a boundary issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileIssue {
    /// Zero-based position inside the upstream `profiles` array.
    pub index: usize,
    pub reason: ProfileValidationError,
}

/// Decoded and validated result of one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileBatch {
    pub summary: EnvelopeSummary,
    /// Accepted profiles in upstream order, flagged ones included.
    pub profiles: Vec<RawProfile>,
    /// Profiles dropped because they do not match the schema.
    pub rejected: Vec<ProfileIssue>,
    /// Accepted profiles with record-level issues, one entry per issue.
    pub flagged: Vec<ProfileIssue>,
}

#[cfg(test)]
mod tests {
    use super::{EnvelopeSummary, ProfileValidationError, RawProfile};

    #[test]
    fn wire_name_keeps_upstream_spelling() {
        let mut profile = RawProfile::new("Ada", "2025-07-31", 2);
        profile.special_occasion = "Birthday".to_string();

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["special_occassion"], "Birthday");
        assert!(json.get("special_occasion").is_none());
    }

    #[test]
    fn issues_flag_blank_name_empty_party_and_odd_date() {
        assert_eq!(
            RawProfile::new("  ", "2025-07-31", 2).issues(),
            vec![ProfileValidationError::BlankName]
        );
        assert_eq!(
            RawProfile::new("Ada", "July 31", 0).issues(),
            vec![
                ProfileValidationError::EmptyParty,
                ProfileValidationError::UnrecognizedDate
            ]
        );
        assert!(RawProfile::new("Ada", "2025-07-31", 1).issues().is_empty());
    }

    #[test]
    fn null_or_missing_occasion_decodes_as_empty() {
        let mut json = serde_json::to_value(RawProfile::new("Ada", "2025-07-31", 2)).unwrap();
        json["special_occassion"] = serde_json::Value::Null;
        let profile: RawProfile = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(profile.special_occasion, "");

        json.as_object_mut().unwrap().remove("special_occassion");
        let profile: RawProfile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.special_occasion, "");
    }

    #[test]
    fn mistyped_summary_counts_decode_as_none() {
        let summary: EnvelopeSummary = serde_json::from_value(serde_json::json!({
            "generated_at": 17,
            "total_reservations": 4,
            "vip_count": null,
            "dietary_count": 1.5,
            "special_occasion_count": "two"
        }))
        .unwrap();
        assert_eq!(summary.generated_at, None);
        assert_eq!(summary.total_reservations, Some(4));
        assert_eq!(summary.vip_count, None);
        assert_eq!(summary.dietary_count, None);
        assert_eq!(summary.special_occasion_count, None);
    }

    #[test]
    fn iso_date_check_flags_other_shapes() {
        assert!(RawProfile::new("Ada", "2025-07-31", 2).has_iso_date());
        assert!(!RawProfile::new("Ada", "July 31", 2).has_iso_date());
        assert!(!RawProfile::new("Ada", "", 2).has_iso_date());
    }
}
