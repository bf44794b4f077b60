//! Display implementations for error types

use super::types::Error;
use crate::constants::PANIC_PREFIX;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open { path, source } => {
                write!(f, "open {}: {}", path.display(), source)
            }
            Error::Panic { message } => write!(f, "{PANIC_PREFIX}: {message}"),
            Error::Message { message } => f.write_str(message),
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
            Error::Context { message, source } => {
                write!(f, "{message}: {source}")
            }
        }
    }
}
