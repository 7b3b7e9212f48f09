//! Post-fetch client module
//!
//! One HTTP GET per page request against the to-do collection: decodes a
//! JSON array into typed records and surfaces the optional `X-Total-Count`
//! collection size. No retries and no caching; the caller decides how to
//! react to a failed page.

mod client;
mod types;

pub use client::{PageFetcher, TodoClient, DEFAULT_BASE_URL, TOTAL_COUNT_HEADER};
pub use types::PageFetch;

#[cfg(test)]
mod tests;
