//! Dashboard state machine.
//!
//! # Responsibility
//! - Hold the fetched reservation batch, fetch phase, view mode and filter.
//! - Gate fetch results through per-refresh generations so only the latest
//!   refresh can commit.
//!
//! # Invariants
//! - Phases move `Idle -> Loading -> {Ready, Failed}` and back to `Loading`
//!   only through `begin_refresh`.
//! - `error` is `Some` exactly when the phase is `Failed`.
//! - A failed refresh discards the previous batch.
//! - A ticket commits at most once, and only while it is the newest ticket.

use crate::fetch::FetchResult;
use crate::model::reservation::{
    FilterType, KitchenStats, Reservation, ReservationStats, ViewMode,
};
use crate::service::filter::{select_reservations, FilterState};
use crate::service::stats::{calculate_kitchen_stats, calculate_stats};
use crate::service::view::{board_heading, empty_filter_message};
use log::{debug, info, warn};
use serde::Serialize;

/// Fetch lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl DashboardPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

/// Proof of one started refresh; required to commit its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of handing a fetch result back to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The batch replaced the current reservations.
    Committed { count: usize },
    /// The failure was recorded and prior reservations discarded.
    Failed { message: String },
    /// A newer refresh started, or this ticket already committed.
    Stale,
}

/// Mutable dashboard state with explicit transitions.
#[derive(Debug, Clone)]
pub struct DashboardState {
    phase: DashboardPhase,
    generation: u64,
    reservations: Vec<Reservation>,
    error: Option<String>,
    filter: FilterState,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}

impl DashboardState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            phase: DashboardPhase::Idle,
            generation: 0,
            reservations: Vec::new(),
            error: None,
            filter: FilterState::new(view_mode),
        }
    }

    pub fn phase(&self) -> DashboardPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn view_mode(&self) -> ViewMode {
        self.filter.view_mode()
    }

    pub fn active_filter(&self) -> FilterType {
        self.filter.active()
    }

    /// Starts a refresh and returns the ticket that may commit its result.
    ///
    /// Any ticket issued earlier becomes stale. The current batch stays
    /// visible while loading.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = DashboardPhase::Loading;
        self.error = None;
        debug!(
            "event=refresh_begin module=dashboard generation={}",
            self.generation
        );
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Commits a fetch result if `ticket` is still the newest refresh.
    pub fn complete_refresh(
        &mut self,
        ticket: FetchTicket,
        result: FetchResult<Vec<Reservation>>,
    ) -> CommitOutcome {
        if ticket.generation != self.generation || self.phase != DashboardPhase::Loading {
            info!(
                "event=refresh_discarded module=dashboard ticket={} current={}",
                ticket.generation, self.generation
            );
            return CommitOutcome::Stale;
        }

        match result {
            Ok(reservations) => {
                let count = reservations.len();
                self.reservations = reservations;
                self.phase = DashboardPhase::Ready;
                info!(
                    "event=refresh_commit module=dashboard status=ok generation={} count={count}",
                    self.generation
                );
                CommitOutcome::Committed { count }
            }
            Err(err) => {
                let message = err.to_string();
                self.reservations.clear();
                self.phase = DashboardPhase::Failed;
                self.error = Some(message.clone());
                warn!(
                    "event=refresh_commit module=dashboard status=error generation={}",
                    self.generation
                );
                CommitOutcome::Failed { message }
            }
        }
    }

    /// Applies one filter click with toggle-to-clear semantics.
    pub fn toggle_filter(&mut self, filter: FilterType) -> FilterType {
        self.filter.toggle(filter)
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Switches audience; always resets the active filter.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.filter.set_view_mode(view_mode);
    }

    /// Reservations matching the active filter, in batch order.
    pub fn filtered(&self) -> Vec<&Reservation> {
        select_reservations(&self.reservations, self.filter.active())
    }

    pub fn stats(&self) -> ReservationStats {
        calculate_stats(&self.reservations)
    }

    pub fn kitchen_stats(&self) -> KitchenStats {
        calculate_kitchen_stats(&self.reservations)
    }

    /// Looks up one reservation of the current batch by positional id.
    pub fn find(&self, id: u32) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Captures an immutable view of the current state.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let filtered = self
            .filtered()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let active_filter = self.filter.active();
        DashboardSnapshot {
            phase: self.phase,
            generation: self.generation,
            error: self.error.clone(),
            view_mode: self.filter.view_mode(),
            active_filter,
            heading: board_heading(
                self.filter.view_mode(),
                active_filter,
                filtered.len(),
                self.reservations.len(),
            ),
            empty_message: empty_filter_message(active_filter, filtered.len()),
            stats: self.stats(),
            kitchen_stats: self.kitchen_stats(),
            reservations: self.reservations.clone(),
            filtered,
        }
    }
}

/// Render-ready copy of the dashboard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub phase: DashboardPhase,
    pub generation: u64,
    pub error: Option<String>,
    pub view_mode: ViewMode,
    pub active_filter: FilterType,
    pub heading: String,
    pub empty_message: Option<&'static str>,
    pub stats: ReservationStats,
    pub kitchen_stats: KitchenStats,
    pub reservations: Vec<Reservation>,
    pub filtered: Vec<Reservation>,
}
