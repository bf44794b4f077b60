//! Core errors, constants, and configuration for the `with` helpers.
//!
//! The helper functions themselves live in `with-utils`; this crate holds the
//! pieces they share so that callers can name the error type without pulling
//! in the helpers.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias. Open failures and
//!   recovered panics are reported through it.
//! - **`config`**: `OpenerConfig`, the knobs for the file opener.
//! - **`constants`**: environment variable names and defaults.

pub mod config;
pub mod constants;
pub mod errors;

pub use self::{
    config::OpenerConfig,
    constants::*,
    errors::{Error, Result, ResultExt},
};
