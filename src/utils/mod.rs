//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window access and element measurement helpers
//! - [`fetch_json`] - One-shot JSON fetch with timeout

pub mod dom;
mod fetch;

pub use fetch::fetch_json;
