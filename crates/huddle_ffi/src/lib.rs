//! Flutter-facing bridge over `huddle_core`.

pub mod api;
