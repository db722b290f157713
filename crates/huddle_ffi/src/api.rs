//! FFI use-case API for the huddle board shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level board functions to Dart via FRB.
//! - Own the process-wide dashboard state the shell renders from.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The state lock is never held while a fetch is in flight.
//! - Only the newest refresh can commit into the board.

use huddle_core::service::view::{DetailSection, RestrictionBadge};
use huddle_core::{
    core_version as core_version_inner, fetch_reservations, guest_card, guest_detail,
    init_logging as init_logging_inner, ping as ping_inner, CommitOutcome, DashboardState,
    FetchResult, FileProfileSource, FilterType, HttpProfileSource, HuddleConfig, ProfileSource,
    Reservation, ViewMode,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static DASHBOARD: OnceLock<Mutex<DashboardState>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One dietary badge on a guest card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionItem {
    pub label: String,
    pub alert: bool,
}

/// Card row rendered in the reservation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestCardItem {
    /// Positional id; only valid for the batch it came from.
    pub id: u32,
    pub title: String,
    pub time: String,
    pub party_label: String,
    pub summary: String,
    pub is_vip: bool,
    pub has_alerts: bool,
    pub critical: bool,
    pub large_party: bool,
    pub special_occasion: Option<String>,
    pub has_accessibility: bool,
    pub restrictions: Vec<RestrictionItem>,
}

/// Counts shown in the statistics grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    pub total_reservations: u32,
    pub vip_count: u32,
    pub dietary_count: u32,
    pub celebration_count: u32,
    pub severe_allergy_count: u32,
    pub accessibility_count: u32,
}

/// Full render input for one frame of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// `idle|loading|ready|failed`.
    pub phase: String,
    pub error: Option<String>,
    /// `front-of-house|back-of-house`.
    pub view_mode: String,
    /// `all|vip|dietary|celebrations`.
    pub active_filter: String,
    pub heading: String,
    pub empty_message: Option<String>,
    pub stats: BoardStats,
    /// Cards for the filtered reservations, in batch order.
    pub cards: Vec<GuestCardItem>,
}

/// Action envelope for calls that can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardActionResponse {
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    pub view: DashboardView,
}

/// One titled block of the guest detail dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSectionItem {
    pub heading: String,
    pub lines: Vec<String>,
    pub emphasized: bool,
}

/// Guest detail dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetailItem {
    pub id: u32,
    pub title: String,
    pub time: String,
    pub party_label: String,
    pub has_alerts: bool,
    pub critical: bool,
    pub sections: Vec<DetailSectionItem>,
}

/// Reloads the board from the insights endpoint.
///
/// `endpoint` overrides `HUDDLE_ENDPOINT` and the default when non-blank.
///
/// # FFI contract
/// - Blocking call; run off the UI thread.
/// - A newer refresh started meanwhile wins; this call then reports `ok=false`.
/// - Never panics.
pub fn dashboard_refresh(endpoint: Option<String>) -> DashboardActionResponse {
    let config = match resolve_config(endpoint) {
        Ok(config) => config,
        Err(message) => return rejected(message),
    };
    refresh_with(|| {
        let source = HttpProfileSource::from_config(&config)?;
        fetch_reservations(&source)
    })
}

/// Reloads the board from a local insights JSON file.
///
/// # FFI contract
/// - Blocking call; same commit rules as `dashboard_refresh`.
/// - Never panics.
pub fn dashboard_load_file(path: String) -> DashboardActionResponse {
    let source = FileProfileSource::new(path.trim());
    refresh_with(|| fetch_reservations(&source as &dyn ProfileSource))
}

/// Returns the current board frame.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_view() -> DashboardView {
    to_view(&lock_dashboard())
}

/// Applies one statistics-grid click.
///
/// Unknown labels behave as `all`. Clicking the active filter clears it.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_toggle_filter(filter: String) -> DashboardView {
    let mut state = lock_dashboard();
    state.toggle_filter(FilterType::parse_lenient(filter.as_str()));
    to_view(&state)
}

/// Clears the active filter.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_clear_filter() -> DashboardView {
    let mut state = lock_dashboard();
    state.clear_filter();
    to_view(&state)
}

/// Switches audience and resets the active filter.
///
/// # FFI contract
/// - Unknown mode labels are rejected and leave state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_set_view_mode(mode: String) -> DashboardActionResponse {
    let mut state = lock_dashboard();
    match ViewMode::parse(mode.as_str()) {
        Ok(view_mode) => {
            state.set_view_mode(view_mode);
            DashboardActionResponse {
                ok: true,
                message: format!("View mode set to {view_mode}."),
                view: to_view(&state),
            }
        }
        Err(err) => DashboardActionResponse {
            ok: false,
            message: format!("dashboard_set_view_mode failed: {err}"),
            view: to_view(&state),
        },
    }
}

/// Returns detail content for one reservation of the current batch.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_guest_detail(id: u32) -> Option<GuestDetailItem> {
    let state = lock_dashboard();
    let view_mode = state.view_mode();
    state
        .find(id)
        .map(|reservation| to_detail_item(reservation, view_mode))
}

fn refresh_with(fetch: impl FnOnce() -> FetchResult<Vec<Reservation>>) -> DashboardActionResponse {
    let ticket = lock_dashboard().begin_refresh();
    let result = fetch();

    let mut state = lock_dashboard();
    let (ok, message) = match state.complete_refresh(ticket, result) {
        CommitOutcome::Committed { count } => (true, format!("Loaded {count} reservation(s).")),
        CommitOutcome::Failed { message } => (false, message),
        CommitOutcome::Stale => (false, "Superseded by a newer refresh.".to_string()),
    };
    DashboardActionResponse {
        ok,
        message,
        view: to_view(&state),
    }
}

fn rejected(message: String) -> DashboardActionResponse {
    DashboardActionResponse {
        ok: false,
        message,
        view: to_view(&lock_dashboard()),
    }
}

fn resolve_config(endpoint: Option<String>) -> Result<HuddleConfig, String> {
    let mut config =
        HuddleConfig::from_env().map_err(|err| format!("dashboard config invalid: {err}"))?;
    if let Some(endpoint) = endpoint.filter(|value| !value.trim().is_empty()) {
        config = config.with_endpoint(endpoint);
        config
            .validate()
            .map_err(|err| format!("dashboard config invalid: {err}"))?;
    }
    Ok(config)
}

fn lock_dashboard() -> MutexGuard<'static, DashboardState> {
    DASHBOARD
        .get_or_init(|| Mutex::new(DashboardState::default()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_view(state: &DashboardState) -> DashboardView {
    let snapshot = state.snapshot();
    let cards = snapshot
        .filtered
        .iter()
        .map(|reservation| to_card_item(reservation, snapshot.view_mode))
        .collect();
    DashboardView {
        phase: snapshot.phase.as_str().to_string(),
        error: snapshot.error,
        view_mode: snapshot.view_mode.as_str().to_string(),
        active_filter: snapshot.active_filter.as_str().to_string(),
        heading: snapshot.heading,
        empty_message: snapshot.empty_message.map(str::to_string),
        stats: BoardStats {
            total_reservations: count_u32(snapshot.stats.total_reservations),
            vip_count: count_u32(snapshot.stats.vip_count),
            dietary_count: count_u32(snapshot.stats.dietary_count),
            celebration_count: count_u32(snapshot.stats.celebration_count),
            severe_allergy_count: count_u32(snapshot.kitchen_stats.severe_allergy_count),
            accessibility_count: count_u32(snapshot.kitchen_stats.accessibility_count),
        },
        cards,
    }
}

fn to_card_item(reservation: &Reservation, view_mode: ViewMode) -> GuestCardItem {
    let card = guest_card(reservation, view_mode);
    GuestCardItem {
        id: card.id,
        title: card.title,
        time: card.time,
        party_label: card.party_label,
        summary: card.summary,
        is_vip: card.is_vip,
        has_alerts: card.has_alerts,
        critical: card.critical,
        large_party: card.large_party,
        special_occasion: card.special_occasion,
        has_accessibility: card.has_accessibility,
        restrictions: card
            .restrictions
            .into_iter()
            .map(|RestrictionBadge { label, alert }| RestrictionItem { label, alert })
            .collect(),
    }
}

fn to_detail_item(reservation: &Reservation, view_mode: ViewMode) -> GuestDetailItem {
    let detail = guest_detail(reservation, view_mode);
    GuestDetailItem {
        id: detail.id,
        title: detail.title,
        time: detail.time,
        party_label: detail.party_label,
        has_alerts: detail.has_alerts,
        critical: detail.critical,
        sections: detail
            .sections
            .into_iter()
            .map(
                |DetailSection {
                     heading,
                     lines,
                     emphasized,
                 }| DetailSectionItem {
                    heading: heading.to_string(),
                    lines,
                    emphasized,
                },
            )
            .collect(),
    }
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
