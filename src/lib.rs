//! shellpane - Typed client for the shellpane view-execution service
//!
//! A shellpane server runs named views (parameterized shell commands) and
//! returns their captured output. This library provides the wire contract
//! and an async client for its two operations: listing view specs and
//! fetching one step's output with environment overrides.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod client;
pub mod config;
pub mod models;
pub mod output;
pub mod paths;
