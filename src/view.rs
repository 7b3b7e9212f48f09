//! View derivation
//!
//! A pure projection of [`PaginationState`] into everything a frontend
//! needs to draw the screen. Widgets, theming and layout belong to the
//! frontend; this module only decides what is visible and which actions
//! are offered.

use crate::pagination::PaginationState;
use crate::types::Todo;

/// What a frontend should render for a given pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<'a> {
    /// Rows of the record table
    pub rows: &'a [Todo],
    /// Show the record table
    pub show_table: bool,
    /// Show the empty placeholder instead of the table
    pub show_placeholder: bool,
    /// Show the loading indicator
    pub show_spinner: bool,
    /// Always-visible page position line
    pub page_indicator: String,
    /// Previous action enablement
    pub previous_enabled: bool,
    /// Next action enablement
    pub next_enabled: bool,
}

impl<'a> ViewState<'a> {
    /// Derive the view from pagination state
    pub fn derive(state: &'a PaginationState) -> Self {
        Self {
            rows: &state.records,
            show_table: !state.records.is_empty(),
            show_placeholder: state.records.is_empty() && !state.is_loading(),
            show_spinner: state.is_loading(),
            page_indicator: format!("Page {} of {}", state.current_page, state.total_pages),
            previous_enabled: state.previous_enabled(),
            next_enabled: state.next_enabled(),
        }
    }
}
