//! Pagination state and transitions

use crate::fetch::PageFetch;
use crate::types::{Todo, PAGE_SIZE};

/// Lifecycle of the current page's fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch issued yet
    #[default]
    Idle,
    /// A fetch is outstanding
    Loading,
    /// The last completed fetch succeeded
    Loaded,
    /// The last completed fetch failed
    Failed,
}

/// Mutable pagination state owned by the controller
///
/// Created at screen mount with its defaults and destroyed with the
/// screen; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Current 1-indexed page
    pub current_page: u32,
    /// Known page count, at least 1
    pub total_pages: u32,
    /// Fetch lifecycle for the current page
    pub phase: FetchPhase,
    /// Whether forward pages are believed to exist
    pub has_more: bool,
    /// Records of the most recently completed successful fetch
    pub records: Vec<Todo>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            phase: FetchPhase::Idle,
            has_more: true,
            records: Vec::new(),
        }
    }
}

impl PaginationState {
    /// Create the mount-time state
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Mark a fetch as issued for the current page
    pub fn begin_loading(&mut self) {
        self.phase = FetchPhase::Loading;
    }

    /// Apply a successful page fetch
    ///
    /// A total count, when present, re-derives `total_pages` (clamped to
    /// at least 1); an absent count keeps the previous value rather than
    /// resetting it. `has_more` requires a full page, and additionally
    /// `current_page < total_pages` whenever the response carried a count.
    /// Records are replaced wholesale, never merged.
    pub fn apply_success(&mut self, fetch: PageFetch) {
        let PageFetch {
            records,
            total_count,
        } = fetch;

        if let Some(total) = total_count {
            self.total_pages = (total.div_ceil(u64::from(PAGE_SIZE)) as u32).max(1);
        }

        let full_page = records.len() == PAGE_SIZE as usize;
        self.has_more =
            full_page && (total_count.is_none() || self.current_page < self.total_pages);

        self.records = records;
        self.phase = FetchPhase::Loaded;
    }

    /// Apply a failed page fetch
    ///
    /// Forward navigation is frozen; the records of the last successful
    /// page stay visible.
    pub fn apply_failure(&mut self) {
        self.has_more = false;
        self.phase = FetchPhase::Failed;
    }

    /// Whether the previous action is currently offered
    pub fn previous_enabled(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the next action is currently offered
    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Step back one page
    ///
    /// Returns false, leaving state untouched, when already at the first
    /// page.
    pub fn step_previous(&mut self) -> bool {
        if self.previous_enabled() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page
    ///
    /// Returns false, leaving state untouched, when at the last known
    /// page.
    pub fn step_next(&mut self) -> bool {
        if self.next_enabled() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }
}
