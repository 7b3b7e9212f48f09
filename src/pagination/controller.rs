//! Pagination controller
//!
//! Owns the pagination state and the fetch client. Issues one fetch per
//! page change and applies completions under a ticket check.

use super::types::PaginationState;
use crate::error::Result;
use crate::fetch::{PageFetch, PageFetcher};
use crate::types::PAGE_SIZE;
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, warn};

/// Identifies one issued fetch
///
/// Tickets increase monotonically per controller. Only the completion
/// carrying the most recently issued ticket is applied, so an overlapping
/// older fetch can never overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// A fetch that has been issued but not yet applied
pub struct PendingFetch {
    /// Ticket to hand back to [`PaginationController::complete_fetch`]
    pub ticket: FetchTicket,
    /// The in-flight request
    pub future: BoxFuture<'static, Result<PageFetch>>,
}

/// Drives paginated browsing over a [`PageFetcher`]
///
/// The controller is the sole writer of its [`PaginationState`]: state
/// mutates only at fetch entry and at fetch completion, never mid-flight.
pub struct PaginationController {
    fetcher: Arc<dyn PageFetcher>,
    state: PaginationState,
    latest_ticket: u64,
}

impl PaginationController {
    /// Create a controller in the mount-time state
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            state: PaginationState::new(),
            latest_ticket: 0,
        }
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Issue a fetch for the current page
    ///
    /// The returned future borrows nothing from the controller; await it
    /// anywhere, then hand the outcome to
    /// [`complete_fetch`](Self::complete_fetch). Issuing a new fetch
    /// supersedes any fetch still in flight.
    pub fn begin_fetch(&mut self) -> PendingFetch {
        self.latest_ticket += 1;
        let ticket = FetchTicket(self.latest_ticket);
        self.state.begin_loading();

        let fetcher = Arc::clone(&self.fetcher);
        let page = self.state.current_page;
        debug!(page, ticket = self.latest_ticket, "issuing page fetch");

        PendingFetch {
            ticket,
            future: Box::pin(async move { fetcher.fetch_page(page, PAGE_SIZE).await }),
        }
    }

    /// Apply a fetch completion
    ///
    /// Returns false when the ticket is stale and the completion was
    /// discarded without touching state.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: Result<PageFetch>) -> bool {
        if ticket != FetchTicket(self.latest_ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale fetch completion"
            );
            return false;
        }

        match outcome {
            Ok(fetch) => self.state.apply_success(fetch),
            Err(error) => {
                warn!(page = self.state.current_page, %error, "page fetch failed");
                self.state.apply_failure();
            }
        }
        true
    }

    /// Fetch the current page and apply the result
    ///
    /// Convenience for sequential drivers; equivalent to
    /// [`begin_fetch`](Self::begin_fetch) followed by awaiting the future
    /// and applying its completion.
    pub async fn reload(&mut self) {
        let PendingFetch { ticket, future } = self.begin_fetch();
        let outcome = future.await;
        self.complete_fetch(ticket, outcome);
    }

    /// Step back one page when offered
    ///
    /// Returns whether the page changed; the caller follows an applied
    /// change with a fetch.
    pub fn previous(&mut self) -> bool {
        self.state.step_previous()
    }

    /// Step forward one page when offered
    pub fn next(&mut self) -> bool {
        self.state.step_next()
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("state", &self.state)
            .field("latest_ticket", &self.latest_ticket)
            .finish_non_exhaustive()
    }
}
