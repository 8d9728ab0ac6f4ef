//! Runtime layer for the node payout history report.
//!
//! Composes period enumeration, fetching, table building and presentation
//! into a single report run.

pub mod runner;

pub use history_core as core;
pub use history_data as data;
