//! Data layer for the node payout history report.
//!
//! Fetches per-node, per-period paystub totals over HTTP and folds them into
//! the payout table consumed by the presenters.

pub mod builder;
pub mod fetcher;

pub use history_core as core;
