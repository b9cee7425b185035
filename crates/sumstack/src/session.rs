//! Interaction state for the calculator client.
//!
//! A [`Session`] holds everything the front-end displays: the two editable
//! operand fields, the last backend result, a status message, the loading
//! flag, and a cached copy of the service-owned history. It is mutated only
//! by the two synchronization operations, [`Session::submit`] and
//! [`Session::refresh_history`].

use crate::api::CalculationRecord;
use crate::client::CalculationApi;

/// Prefix for success annotations.
pub const SUCCESS_PREFIX: &str = "✅";

/// Prefix for failure annotations.
pub const FAILURE_PREFIX: &str = "❌";

/// Message shown when a submit fails at the transport level.
pub const CONNECT_FAILED_PREFIX: &str = "❌ Connection failed: ";

/// Message shown when the history fetch fails.
pub const HISTORY_UNAVAILABLE: &str = "❌ Could not connect to backend";

/// Default first operand field.
const DEFAULT_NUM1: &str = "1";

/// Default second operand field.
const DEFAULT_NUM2: &str = "2";

/// Default displayed result. A stale placeholder, never computed locally.
const DEFAULT_RESULT: f64 = 3.0;

/// Parses a UI operand field the way the form does: anything that is not a
/// number becomes NaN and is sent to the backend as-is, unvalidated.
#[must_use]
pub fn parse_operand(field: &str) -> f64 {
    field.trim().parse().unwrap_or(f64::NAN)
}

/// Client-side calculator state synchronized against a remote backend.
#[derive(Debug)]
pub struct Session<A> {
    /// Backend operations.
    api: A,
    /// First operand field, as typed.
    num1: String,
    /// Second operand field, as typed.
    num2: String,
    /// Last result reported by the backend.
    result: f64,
    /// Status annotation from the last operation.
    message: String,
    /// True only while a submit is in flight. Guards against duplicates.
    loading: bool,
    /// Cached history, oldest first, replaced wholesale on every fetch.
    history: Vec<CalculationRecord>,
}

impl<A: CalculationApi> Session<A> {
    /// Creates a session with default field values.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            num1: DEFAULT_NUM1.to_string(),
            num2: DEFAULT_NUM2.to_string(),
            result: DEFAULT_RESULT,
            message: String::new(),
            loading: false,
            history: Vec::new(),
        }
    }

    /// Returns the backend handle.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the first operand field.
    #[must_use]
    pub fn num1(&self) -> &str {
        &self.num1
    }

    /// Returns the second operand field.
    #[must_use]
    pub fn num2(&self) -> &str {
        &self.num2
    }

    /// Returns the last backend result.
    #[must_use]
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Returns the current status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true while a submit is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sets the loading flag directly (for testing).
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Overwrites the first operand field.
    pub fn set_num1(&mut self, value: impl Into<String>) {
        self.num1 = value.into();
    }

    /// Overwrites the second operand field.
    pub fn set_num2(&mut self, value: impl Into<String>) {
        self.num2 = value.into();
    }

    /// Returns the cached history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CalculationRecord] {
        &self.history
    }

    /// Returns the cached history for display, newest first.
    pub fn history_newest_first(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.history.iter().rev()
    }

    /// Eagerly fetches history once, as the front-end does on startup.
    pub async fn activate(&mut self) {
        self.refresh_history().await;
    }

    /// Re-reads the full calculation list from the backend.
    ///
    /// On success the cached sequence is replaced verbatim. On any failure
    /// the previous history stays on screen and the status message turns
    /// into a generic connectivity notice. Never retried.
    pub async fn refresh_history(&mut self) {
        match self.api.fetch_history().await {
            Ok(resp) if resp.success => {
                self.history = resp.data;
            }
            Ok(_) => {
                // Service declined to produce a list; keep showing what we had.
            }
            Err(err) => {
                tracing::warn!(%err, "history fetch failed");
                self.message = HISTORY_UNAVAILABLE.to_string();
            }
        }
    }

    /// Submits the current operand fields for addition.
    ///
    /// No-op while a previous submit is still in flight. The loading flag
    /// is released exactly once on every path, and a successful submit
    /// triggers a history refresh after the response is observed.
    pub async fn submit(&mut self) {
        if self.loading {
            return;
        }

        self.loading = true;
        self.message.clear();

        let num1 = parse_operand(&self.num1);
        let num2 = parse_operand(&self.num2);

        match self.api.calculate(num1, num2).await {
            Ok(resp) if resp.success => {
                if let Some(result) = resp.result() {
                    self.result = result;
                    self.message = format!("{SUCCESS_PREFIX} {}", resp.message);
                    self.refresh_history().await;
                } else {
                    // success without a payload; surface it, keep the old result
                    self.message = format!("{FAILURE_PREFIX} {}", resp.message);
                }
            }
            Ok(resp) => {
                self.message = format!("{FAILURE_PREFIX} {}", resp.message);
            }
            Err(err) => {
                tracing::warn!(%err, "calculation request failed");
                self.message = format!("{CONNECT_FAILED_PREFIX}{err}");
            }
        }

        self.loading = false;
    }
}
