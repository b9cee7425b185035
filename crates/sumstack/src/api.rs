//! Wire types for the calculation backend.
//!
//! The backend speaks a two-endpoint JSON API: a write endpoint that adds
//! two numbers and a read endpoint that lists past calculations. Every
//! response is wrapped in a `success` envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for the write endpoint (`POST /api/calculate`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// First operand.
    pub num1: f64,
    /// Second operand.
    pub num2: f64,
}

/// Inner payload of a successful calculation response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculateData {
    /// The computed sum.
    pub result: f64,
}

/// Response from the write endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Whether the service accepted and performed the calculation.
    pub success: bool,
    /// Human-readable annotation supplied by the service.
    #[serde(default)]
    pub message: String,
    /// Result payload; present when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CalculateData>,
}

impl CalculateResponse {
    /// Returns the computed result, if the response carried one.
    #[must_use]
    pub fn result(&self) -> Option<f64> {
        self.data.map(|d| d.result)
    }
}

/// Identifier of a service-owned calculation record.
///
/// The service reports integers or opaque strings depending on its backing
/// store, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Sequential numeric identifier.
    Int(i64),
    /// Opaque string identifier.
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One past calculation, owned by the service.
///
/// The client only ever holds an ephemeral read-only copy of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Record identifier (`id`, or `_id` from document stores).
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// First operand.
    pub num1: f64,
    /// Second operand.
    pub num2: f64,
    /// The sum the service computed.
    pub result: f64,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
}

impl CalculationRecord {
    /// Formats the record as `a + b = r` for display.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} + {} = {}", self.num1, self.num2, self.result)
    }
}

/// Response from the read endpoint (`GET /api/calculations`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Whether the service produced the list.
    pub success: bool,
    /// All recorded calculations, oldest first.
    #[serde(default)]
    pub data: Vec<CalculationRecord>,
}
