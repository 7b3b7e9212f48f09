//! HTTP transport module
//!
//! A thin, single-attempt HTTP GET layer over reqwest.
//!
//! # Features
//!
//! - **Base URL Joining**: Relative paths resolved against a configured base
//! - **Query Parameters**: Per-request query and header configuration
//! - **Error Classification**: Transport failures vs. non-2xx statuses
//!
//! Each call issues exactly one request; reacting to failures is the
//! caller's decision.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
