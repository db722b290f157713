//! Huddle use-case services.
//!
//! # Responsibility
//! - Derive reservations, statistics, filtered views and guest projections.
//! - Keep every derivation pure so UI/FFI layers can recompute per render.

pub mod filter;
pub mod stats;
pub mod transform;
pub mod view;
