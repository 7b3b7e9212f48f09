//! Pagination module
//!
//! State machine for Previous/Next browsing over fixed-size pages.
//!
//! # Overview
//!
//! One fetch is issued per page change. A successful fetch replaces the
//! record buffer wholesale and re-derives the known page count from the
//! optional total-count signal; a failed fetch freezes forward navigation
//! and keeps the records of the last successful page. Fetch completions
//! are ticketed so an overlapping older fetch can never overwrite newer
//! state.

mod controller;
mod types;

pub use controller::{FetchTicket, PaginationController, PendingFetch};
pub use types::{FetchPhase, PaginationState};
