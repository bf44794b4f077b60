//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for `with` operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for `with` operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named resource could not be opened
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A panic caught by `recover` and turned into a value
    Panic { message: String },

    /// A plain failure raised by a callback
    Message { message: String },

    /// Configuration errors
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Another error annotated with a message
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}
