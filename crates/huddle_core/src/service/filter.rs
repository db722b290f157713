//! Board filter selection and toggle state.
//!
//! # Responsibility
//! - Reduce a reservation batch to the active filter category.
//! - Own the toggle-to-clear and reset-on-view-change rules.
//!
//! # Invariants
//! - Selection preserves input order.
//! - `FilterType::All` selects every reservation unconditionally.
//! - Any view-mode change leaves the active filter at `All`.

use crate::model::reservation::{FilterType, Reservation, ViewMode};

/// Returns whether `reservation` belongs to `filter`.
pub fn matches_filter(reservation: &Reservation, filter: FilterType) -> bool {
    match filter {
        FilterType::All => true,
        FilterType::Vip => reservation.is_vip,
        FilterType::Dietary => !reservation.dietary_restrictions.is_empty(),
        FilterType::Celebrations => reservation.special_occasion.is_some(),
    }
}

/// Returns the ordered subsequence matching `filter`.
pub fn select_reservations(reservations: &[Reservation], filter: FilterType) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|reservation| matches_filter(reservation, filter))
        .collect()
}

/// Active filter plus the view mode it was chosen under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    active: FilterType,
    view_mode: ViewMode,
}

impl FilterState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            active: FilterType::All,
            view_mode,
        }
    }

    pub fn active(&self) -> FilterType {
        self.active
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Applies one filter click.
    ///
    /// Choosing the active filter again reverts to `All`; any other choice
    /// replaces the active filter.
    pub fn toggle(&mut self, filter: FilterType) -> FilterType {
        self.active = if self.active == filter {
            FilterType::All
        } else {
            filter
        };
        self.active
    }

    /// Clears the active filter.
    pub fn clear(&mut self) {
        self.active = FilterType::All;
    }

    /// Switches audience and resets the active filter to `All`.
    ///
    /// The reset also happens when `view_mode` equals the current mode.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
        self.active = FilterType::All;
    }
}

#[cfg(test)]
mod tests {
    use super::FilterState;
    use crate::model::reservation::{FilterType, ViewMode};

    #[test]
    fn toggling_twice_returns_to_all() {
        for filter in [FilterType::Vip, FilterType::Dietary, FilterType::Celebrations] {
            let mut state = FilterState::default();
            state.toggle(filter);
            assert_eq!(state.active(), filter);
            state.toggle(filter);
            assert_eq!(state.active(), FilterType::All);
        }
    }

    #[test]
    fn choosing_another_filter_replaces_active() {
        let mut state = FilterState::default();
        state.toggle(FilterType::Vip);
        assert_eq!(state.toggle(FilterType::Dietary), FilterType::Dietary);
    }

    #[test]
    fn toggling_all_keeps_all() {
        let mut state = FilterState::default();
        assert_eq!(state.toggle(FilterType::All), FilterType::All);
    }

    #[test]
    fn view_mode_change_resets_filter() {
        let mut state = FilterState::new(ViewMode::FrontOfHouse);
        state.toggle(FilterType::Celebrations);
        state.set_view_mode(ViewMode::BackOfHouse);
        assert_eq!(state.active(), FilterType::All);
        assert_eq!(state.view_mode(), ViewMode::BackOfHouse);
    }
}
