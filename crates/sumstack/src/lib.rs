//! Sumstack client library.
//!
//! Client-side state and HTTP transport for a remote addition service. The
//! backend owns the arithmetic and the calculation history; this library
//! owns the interaction state (operand fields, last result, status message,
//! loading flag, cached history) and keeps it synchronized through two
//! operations: submit-calculation and fetch-history.
//!
//! # Example
//!
//! ```rust,no_run
//! use sumstack::prelude::*;
//!
//! # async fn demo() {
//! let client = CalcClient::new("http://localhost:5001");
//! let mut session = Session::new(client);
//!
//! // Eager history fetch on startup.
//! session.activate().await;
//!
//! session.set_num1("2");
//! session.set_num2("3");
//! session.submit().await;
//!
//! println!("{} {}", session.result(), session.message());
//! # }
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod api;
pub mod client;
pub mod config;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::api::{
        CalculateData, CalculateRequest, CalculateResponse, CalculationRecord, HistoryResponse,
        RecordId,
    };
    pub use crate::client::{CalcClient, CalculationApi, ClientError};
    pub use crate::config::{backend_url_from_env, resolve_backend_url, Mode};
    pub use crate::session::{
        parse_operand, Session, CONNECT_FAILED_PREFIX, FAILURE_PREFIX, HISTORY_UNAVAILABLE,
        SUCCESS_PREFIX,
    };
}
