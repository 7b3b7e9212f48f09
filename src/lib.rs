//! # todo-pager
//!
//! A paginated to-do browser over a JSONPlaceholder-style REST API.
//!
//! The crate fetches fixed-size pages of to-do records and drives
//! Previous/Next navigation over them: one fetch per page change, record
//! buffers replaced wholesale on success, forward navigation frozen on
//! failure. Rendering is left to frontends, which consume a pure
//! [`ViewState`] projection; a terminal frontend ships as the `todo-pager`
//! binary.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todo_pager::{PaginationController, TodoClient, ViewState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut controller = PaginationController::new(Arc::new(TodoClient::new()));
//!     controller.reload().await;
//!
//!     let view = ViewState::derive(controller.state());
//!     println!("{}", view.page_indicator);
//!
//!     if controller.next() {
//!         controller.reload().await;
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Rendering frontend                  │
//! │        ViewState ← previous() / next() hooks        │
//! └──────────────────────────┬──────────────────────────┘
//! ┌──────────────────────────┴──────────────────────────┐
//! │                PaginationController                 │
//! │   begin_fetch → ticketed completion → state apply   │
//! └──────────────────────────┬──────────────────────────┘
//!                            │ PageFetcher
//! ┌──────────────────────────┴──────────────────────────┐
//! │    TodoClient → HttpClient → GET /todos?_page=n     │
//! └─────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and constants
pub mod types;

/// Single-attempt HTTP transport
pub mod http;

/// Post-fetch client for the to-do collection
pub mod fetch;

/// Pagination state machine and controller
pub mod pagination;

/// Pure view derivation for rendering frontends
pub mod view;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use fetch::{PageFetch, PageFetcher, TodoClient};
pub use pagination::{FetchPhase, PaginationController, PaginationState};
pub use types::{Todo, PAGE_SIZE};
pub use view::ViewState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
