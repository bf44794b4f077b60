//! Builder methods for creating errors with context

use super::types::Error;
use std::path::{Path, PathBuf};

// Helper methods for creating errors with context
impl Error {
    /// Create an open failure for the named resource
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a recovered-panic error from a panic description
    #[must_use]
    pub fn panic(message: impl Into<String>) -> Self {
        Error::Panic {
            message: message.into(),
        }
    }

    /// Create a plain callback failure
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Error::Message {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Wrap this error with an additional message
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Error::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error, or the error it wraps, is a recovered panic
    pub fn is_panic(&self) -> bool {
        match self {
            Error::Panic { .. } => true,
            Error::Context { source, .. } => source.is_panic(),
            _ => false,
        }
    }

    /// The resource name of an open failure, looking through context layers
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Open { path, .. } => Some(path),
            Error::Context { source, .. } => source.path(),
            _ => None,
        }
    }

    /// The underlying I/O error of an open failure
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Error::Open { source, .. } => Some(source),
            Error::Context { source, .. } => source.io_error(),
            _ => None,
        }
    }
}
