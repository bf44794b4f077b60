//! Conversion implementations for error types

use super::types::Error;

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Message { message }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Message {
            message: message.to_string(),
        }
    }
}
