//! Presentation layer for the node payout history report.
//!
//! Renders the payout table as a box-drawn console grid and exports it as a
//! locale-aware delimited file.

pub mod export;
pub mod table_view;

pub use history_core as core;
