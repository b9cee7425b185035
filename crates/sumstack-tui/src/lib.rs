//! Terminal front-end for the sumstack addition service.
//!
//! Renders the calculator surface (operand fields, backend result, status
//! message, newest-first history) with ratatui and drives a
//! [`sumstack::session::Session`] from keyboard input. All calculator
//! semantics live in the `sumstack` library; this crate is view and input
//! plumbing only.

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

pub mod app;
pub mod input;
pub mod ui;

#[cfg(test)]
pub(crate) mod testutil;

pub use app::{App, Field};
pub use input::{InputHandler, KeyAction};
pub use ui::render;
