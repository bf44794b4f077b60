/// Constants used throughout the `with` workspace
// Environment variable names
pub const WITH_LOG_VAR: &str = "WITH_LOG";
pub const WITH_BUFFER_CAPACITY_VAR: &str = "WITH_BUFFER_CAPACITY";

// Defaults
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Recovered panics
pub const PANIC_PREFIX: &str = "panic";
pub const NON_STRING_PANIC_PAYLOAD: &str = "non-string panic payload";
