//! Scoped-execution helpers.
//!
//! Small higher-order functions around resource cleanup and error handling:
//!
//! - **`open`**: [`reader`] and [`readers`] open files by name, pass them to a
//!   callback and close them on every exit path.
//! - **`recover`**: [`recover`] turns a panic into an ordinary error.
//! - **`sequence`**: [`errors`] runs fallible operations in order and stops at
//!   the first failure; [`discard_value`] adapts value-returning operations to
//!   it; the [`errors!`] macro does the same for closures of mixed types.
//! - **`seeded`**: [`seeded_rng`] lends a deterministically seeded generator
//!   to a callback.
//! - **`run`**: [`run`] calls a closure and returns its value.
//! - **`exclusive`**: [`mutex`] creates a lock scope whose callbacks never
//!   overlap.
//!
//! Callbacks pick their own error type. Helpers that can fail on their own
//! (opening a file, catching a panic) only require `E: From<with_core::Error>`,
//! which holds for [`Error`] itself and for `anyhow::Error`.
//!
//! ```
//! use with_utils::{discard_value, errors, ErrorResultFn};
//! use std::fmt::Write;
//!
//! let out = std::cell::RefCell::new(String::new());
//! let operations: Vec<ErrorResultFn<'_, std::fmt::Error>> = vec![
//!     Box::new(discard_value(|| writeln!(out.borrow_mut(), "one"))),
//!     Box::new(discard_value(|| writeln!(out.borrow_mut(), "two"))),
//!     Box::new(|| Err(std::fmt::Error)),
//!     Box::new(discard_value(|| writeln!(out.borrow_mut(), "three"))),
//! ];
//!
//! assert!(errors(operations).is_err());
//! assert_eq!(out.borrow().as_str(), "one\ntwo\n");
//! ```

pub mod exclusive;
pub mod open;
pub mod recover;
pub mod run;
pub mod seeded;
pub mod sequence;
pub mod tracing;

pub use exclusive::{mutex, Exclusive};
pub use open::{reader, reader_with, readers, readers_with, FileHandle, FileOpener, Open};
pub use recover::{panic_message, recover};
pub use run::run;
pub use seeded::seeded_rng;
pub use sequence::{discard_value, errors, ErrorResultFn};
pub use with_core::{Error, OpenerConfig, Result};

pub use rand::rngs::StdRng;
