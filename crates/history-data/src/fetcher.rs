//! Paystub retrieval from the nodes' local HTTP API.
//!
//! Every request is a single best-effort GET bounded by the configured
//! timeout. Anything that goes wrong collapses into a zero payout so that one
//! unreachable node never aborts the report.

use reqwest::blocking::Client;
use serde::de::Error as _;
use serde::Deserialize;
use tracing::debug;

use history_core::config::{NodeEndpoint, ReportConfig};
use history_core::error::{HistoryError, Result};
use history_core::models::PayoutReading;
use history_core::period::Period;

/// Paystub amounts are reported in millionths of a dollar.
pub const MICRO_UNITS_PER_DOLLAR: f64 = 1_000_000.0;

// ── PayoutSource ──────────────────────────────────────────────────────────────

/// Anything that can report a node's payout for one pay period.
pub trait PayoutSource {
    fn fetch(&self, node: &NodeEndpoint, period: Period) -> PayoutReading;
}

// ── Paystub parsing ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Paystub {
    #[serde(default)]
    paid: Option<f64>,
}

/// Top-level response shapes. Some node versions answer an empty range with
/// the quoted string `"null"` instead of a JSON `null`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaystubsBody {
    Stubs(Option<Vec<Paystub>>),
    Quoted(String),
}

/// Sum the `paid` fields of a paystubs response body, converted to dollars.
///
/// The body is a JSON array of objects, `null`, or the string `"null"`.
/// Records without a `paid` field count as zero.
///
/// # Examples
///
/// ```
/// use history_data::fetcher::parse_paystubs;
///
/// assert_eq!(parse_paystubs(r#"[{"paid":1000000},{"paid":500000}]"#).unwrap(), 1.5);
/// assert_eq!(parse_paystubs("null").unwrap(), 0.0);
/// assert_eq!(parse_paystubs(r#""null""#).unwrap(), 0.0);
/// ```
pub fn parse_paystubs(body: &str) -> std::result::Result<f64, serde_json::Error> {
    let stubs = match serde_json::from_str(body)? {
        PaystubsBody::Stubs(stubs) => stubs.unwrap_or_default(),
        PaystubsBody::Quoted(text) if text == "null" => Vec::new(),
        PaystubsBody::Quoted(text) => {
            let msg = format!("unexpected string body {text:?}");
            return Err(serde_json::Error::custom(msg));
        }
    };
    let micro: f64 = stubs
        .iter()
        .map(|stub| stub.paid.unwrap_or(0.0))
        .sum();
    Ok(micro / MICRO_UNITS_PER_DOLLAR)
}

// ── HttpPayoutSource ──────────────────────────────────────────────────────────

/// Blocking HTTP client for the `/api/heldamount/paystubs` endpoint.
#[derive(Debug, Clone)]
pub struct HttpPayoutSource {
    http: Client,
    node_address: String,
}

impl HttpPayoutSource {
    /// Build a client with the configured per-request timeout.
    ///
    /// Nodes live on the local network, so environment proxies are ignored.
    pub fn new(config: &ReportConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .no_proxy()
            .build()
            .map_err(|e| HistoryError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            node_address: config.node_address.clone(),
        })
    }

    /// Paystubs URL for a single-period range on `node`.
    pub fn paystubs_url(&self, node: &NodeEndpoint, period: Period) -> String {
        format!(
            "http://{}:{}/api/heldamount/paystubs/{}/{}",
            self.node_address, node.port, period, period
        )
    }

    fn try_fetch(&self, url: &str) -> Option<f64> {
        let body = self
            .http
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .ok()?;
        parse_paystubs(&body).ok()
    }
}

impl PayoutSource for HttpPayoutSource {
    fn fetch(&self, node: &NodeEndpoint, period: Period) -> PayoutReading {
        let url = self.paystubs_url(node, period);
        debug!(node = %node.label, %url, "requesting paystubs");

        match self.try_fetch(&url) {
            Some(amount) => PayoutReading::fetched(amount),
            None => PayoutReading::failed(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
