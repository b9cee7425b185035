//! Shared test doubles for the TUI crate.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sumstack::api::{
    CalculateData, CalculateResponse, CalculationRecord, HistoryResponse, RecordId,
};
use sumstack::client::{CalculationApi, ClientError};

/// Backend double that adds locally and serves a fixed history.
#[derive(Debug, Default)]
pub(crate) struct StubApi {
    history: Vec<CalculationRecord>,
}

impl StubApi {
    /// Creates a stub that answers history fetches with the given records.
    pub(crate) fn with_history(history: Vec<CalculationRecord>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl CalculationApi for StubApi {
    async fn fetch_history(&self) -> Result<HistoryResponse, ClientError> {
        Ok(HistoryResponse {
            success: true,
            data: self.history.clone(),
        })
    }

    async fn calculate(&self, num1: f64, num2: f64) -> Result<CalculateResponse, ClientError> {
        Ok(CalculateResponse {
            success: true,
            message: "ok".to_string(),
            data: Some(CalculateData { result: num1 + num2 }),
        })
    }
}

/// Builds history records from `(num1, num2, result)` triples.
pub(crate) fn history_with(entries: &[(f64, f64, f64)]) -> Vec<CalculationRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(i, &(num1, num2, result))| CalculationRecord {
            id: RecordId::Int(i as i64 + 1),
            num1,
            num2,
            result,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, i as u32).unwrap(),
        })
        .collect()
}
