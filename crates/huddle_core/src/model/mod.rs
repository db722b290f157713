//! Huddle domain model.
//!
//! # Responsibility
//! - Define the upstream profile schema exactly as the insights endpoint
//!   delivers it.
//! - Define the reservation view model consumed by front-of-house and
//!   back-of-house boards.
//!
//! # Invariants
//! - Upstream records are never mutated after decode.
//! - Reservations are derived values and carry no identity across fetches.

pub mod profile;
pub mod reservation;
