//! Core types for the node payout history report.
//!
//! Holds the shared error type, CLI settings, the compiled-in report
//! configuration, pay-period arithmetic, locale-aware number formatting and
//! the immutable payout table model used by every other crate.

pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod period;
pub mod settings;
