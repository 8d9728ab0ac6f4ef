//! Compiled-in report configuration.
//!
//! The date range, node list and base address are fixed at build time. They
//! are gathered into one [`ReportConfig`] value constructed at startup and
//! passed explicitly to every stage of the report.

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::error::{HistoryError, Result};
use crate::period::{months, MonthRange, Period};

// ── Defaults ──────────────────────────────────────────────────────────────────

/// First pay period included in the report.
pub const DEFAULT_START: &str = "2023-12";

/// Last pay period included in the report.
pub const DEFAULT_END: &str = "2025-04";

/// Host shared by every node; nodes differ only by port.
pub const DEFAULT_NODE_ADDRESS: &str = "192.168.0.101";

/// `(port, label)` for each monitored node, in display order.
pub const DEFAULT_NODES: &[(u16, &str)] = &[
    (14002, "node01"),
    (14003, "node02"),
    (14004, "node03"),
    (14005, "node04"),
    (14006, "node05"),
    (14007, "node06"),
    (14008, "node07"),
    (14009, "node08"),
    (14010, "node09"),
    (14011, "node10"),
];

/// Upper bound on a single paystub request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 3;

/// Name of the delimited export file before any collision suffix.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "node-history.csv";

// ── NodeEndpoint ──────────────────────────────────────────────────────────────

/// One monitored node: the port it listens on and the column label shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEndpoint {
    pub port: u16,
    pub label: String,
}

impl NodeEndpoint {
    pub fn new(port: u16, label: impl Into<String>) -> Self {
        Self {
            port,
            label: label.into(),
        }
    }
}

// ── ReportConfig ──────────────────────────────────────────────────────────────

/// Everything the report needs to know that is not a command-line choice.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// First pay period (inclusive).
    pub start: Period,
    /// Last pay period (inclusive).
    pub end: Period,
    /// Host name or IP address shared by all nodes.
    pub node_address: String,
    /// Nodes in column order.
    pub nodes: Vec<NodeEndpoint>,
    /// Timeout applied to each paystub request.
    pub request_timeout: Duration,
    /// Base name of the export file.
    pub export_file_name: String,
}

impl ReportConfig {
    /// The configuration compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            start: DEFAULT_START.parse()?,
            end: DEFAULT_END.parse()?,
            node_address: DEFAULT_NODE_ADDRESS.to_string(),
            nodes: DEFAULT_NODES
                .iter()
                .map(|&(port, label)| NodeEndpoint::new(port, label))
                .collect(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        })
    }

    /// Reject configurations that cannot produce a meaningful report.
    ///
    /// Runs before any network activity so a bad range fails fast instead of
    /// rendering an empty table.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(HistoryError::InvalidDateRange {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        if self.node_address.trim().is_empty() {
            return Err(HistoryError::Config("node address is empty".to_string()));
        }
        if self.nodes.is_empty() {
            return Err(HistoryError::Config("no nodes configured".to_string()));
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.port) {
                return Err(HistoryError::Config(format!(
                    "port {} is configured more than once",
                    node.port
                )));
            }
        }

        if self.export_file_name.trim().is_empty() {
            return Err(HistoryError::Config(
                "export file name is empty".to_string(),
            ));
        }

        debug!(
            start = %self.start,
            end = %self.end,
            nodes = self.nodes.len(),
            "report configuration validated"
        );
        Ok(())
    }

    /// Pay periods covered by the report, oldest first.
    pub fn periods(&self) -> MonthRange {
        months(self.start, self.end)
    }

    /// Column labels in node order.
    pub fn labels(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.label.clone()).collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> ReportConfig {
        ReportConfig::builtin().expect("builtin config parses")
    }

    #[test]
    fn test_builtin_values() {
        let config = builtin();
        assert_eq!(config.start.to_string(), "2023-12");
        assert_eq!(config.end.to_string(), "2025-04");
        assert_eq!(config.node_address, "192.168.0.101");
        assert_eq!(config.nodes.len(), 10);
        assert_eq!(config.nodes[0], NodeEndpoint::new(14002, "node01"));
        assert_eq!(config.nodes[9], NodeEndpoint::new(14011, "node10"));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.export_file_name, "node-history.csv");
    }

    #[test]
    fn test_builtin_validates() {
        builtin().validate().expect("builtin config is valid");
    }

    #[test]
    fn test_periods_cover_range() {
        let periods: Vec<String> = builtin().periods().map(|p| p.to_string()).collect();
        assert_eq!(periods.first().map(String::as_str), Some("2023-12"));
        assert_eq!(periods.last().map(String::as_str), Some("2025-04"));
        assert_eq!(periods.len(), 17);
    }

    #[test]
    fn test_labels_follow_node_order() {
        let labels = builtin().labels();
        assert_eq!(labels[0], "node01");
        assert_eq!(labels[4], "node05");
    }

    #[test]
    fn test_validate_rejects_reversed_range() {
        let mut config = builtin();
        config.start = "2025-05".parse().unwrap();
        config.end = "2025-04".parse().unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, HistoryError::InvalidDateRange { .. }));
        assert!(err.to_string().contains("2025-05"));
    }

    #[test]
    fn test_validate_accepts_single_month() {
        let mut config = builtin();
        config.start = config.end;
        config.validate().expect("single month is valid");
    }

    #[test]
    fn test_validate_rejects_empty_nodes() {
        let mut config = builtin();
        config.nodes.clear();
        assert!(matches!(
            config.validate().unwrap_err(),
            HistoryError::Config(_)
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_port() {
        let mut config = builtin();
        config.nodes.push(NodeEndpoint::new(14002, "again"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("14002"));
    }

    #[test]
    fn test_validate_rejects_blank_address() {
        let mut config = builtin();
        config.node_address = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
