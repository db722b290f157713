//! Profile sources and envelope decoding.
//!
//! # Responsibility
//! - Define the `ProfileSource` contract used by CLI and FFI callers.
//! - Decode the insights envelope and validate each profile at the boundary.
//!
//! # Invariants
//! - Envelope summary counts are decoded but never used for derived data.
//! - Only a profile that does not match the schema is skipped; it is reported
//!   and logged. Profiles with record-level issues are flagged and kept, so
//!   accepted profiles keep their upstream relative order.
//! - Envelope summary fields never fail a decode.
//! - Sources never retry; one call is one attempt.

use crate::model::profile::{
    EnvelopeSummary, ProfileBatch, ProfileIssue, ProfileValidationError, RawProfile,
};
use crate::model::reservation::Reservation;
use crate::service::transform::transform_profiles;
use log::warn;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod http;

pub use file::FileProfileSource;
pub use http::HttpProfileSource;

pub type FetchResult<T> = Result<T, FetchError>;

/// Fetch failure surfaced to the board as one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network or client failure before a status was received.
    Transport(String),
    /// Non-2xx HTTP status.
    Status(u16),
    /// Local file could not be read.
    Io(String),
    /// Body is not a valid insights envelope.
    Decode(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "request failed: {message}"),
            Self::Status(code) => write!(f, "HTTP error! status: {code}"),
            Self::Io(message) => write!(f, "failed to read profiles: {message}"),
            Self::Decode(message) => write!(f, "invalid profiles payload: {message}"),
        }
    }
}

impl Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Origin of one profile batch.
pub trait ProfileSource {
    /// Short label for diagnostics, e.g. the endpoint URL or file path.
    fn describe(&self) -> String;
    /// Performs one fetch and returns the validated batch.
    fn fetch_batch(&self) -> FetchResult<ProfileBatch>;
}

/// Fetches one batch and transforms it into reservations.
pub fn fetch_reservations(source: &dyn ProfileSource) -> FetchResult<Vec<Reservation>> {
    let batch = source.fetch_batch()?;
    Ok(transform_profiles(&batch.profiles))
}

#[derive(Deserialize)]
struct WireEnvelope {
    #[serde(flatten)]
    summary: EnvelopeSummary,
    profiles: Vec<serde_json::Value>,
}

/// Decodes an insights envelope and validates every profile.
///
/// # Errors
/// - `FetchError::Decode` when the body is not JSON or lacks `profiles`.
pub fn decode_envelope(body: &[u8]) -> FetchResult<ProfileBatch> {
    let envelope: WireEnvelope = serde_json::from_slice(body)?;

    let mut profiles = Vec::with_capacity(envelope.profiles.len());
    let mut rejected = Vec::new();
    let mut flagged = Vec::new();
    for (index, value) in envelope.profiles.into_iter().enumerate() {
        match serde_json::from_value::<RawProfile>(value) {
            Ok(profile) => {
                for reason in profile.issues() {
                    warn!("event=profile_flagged module=fetch index={index} reason={reason}");
                    flagged.push(ProfileIssue { index, reason });
                }
                profiles.push(profile);
            }
            Err(err) => {
                let reason = ProfileValidationError::Schema(err.to_string());
                warn!("event=profile_rejected module=fetch index={index} reason={reason}");
                rejected.push(ProfileIssue { index, reason });
            }
        }
    }

    Ok(ProfileBatch {
        summary: envelope.summary,
        profiles,
        rejected,
        flagged,
    })
}
