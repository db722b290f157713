//! Core domain logic for the morning huddle board.
//! This crate is the single source of truth for reservation derivation rules.

pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{ConfigError, HuddleConfig};
pub use dashboard::{CommitOutcome, DashboardPhase, DashboardSnapshot, DashboardState, FetchTicket};
pub use fetch::{
    decode_envelope, fetch_reservations, FetchError, FetchResult, FileProfileSource,
    HttpProfileSource, ProfileSource,
};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget,
};
pub use model::profile::{
    EnvelopeSummary, ProfileBatch, ProfileIssue, ProfileValidationError, RawProfile,
};
pub use model::reservation::{
    FilterType, KitchenStats, Reservation, ReservationStats, ViewMode, ViewModeParseError,
};
pub use service::filter::{matches_filter, select_reservations, FilterState};
pub use service::stats::{calculate_kitchen_stats, calculate_stats};
pub use service::transform::{transform_profile, transform_profiles, PLACEHOLDER_TIME};
pub use service::view::{guest_card, guest_detail, GuestCard, GuestDetail};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
