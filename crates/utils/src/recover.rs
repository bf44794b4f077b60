//! Panic recovery

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;
use with_core::{Error, NON_STRING_PANIC_PAYLOAD};

/// Run `cb`, turning a panic into an [`Error::Panic`] in the callback's error type.
///
/// Without a panic the callback's own result comes back unchanged. A panic
/// with payload `"X"` becomes an error displayed as `panic: X`.
///
/// The callback is treated as unwind safe: whatever state it touched is the
/// caller's to inspect after a recovered panic. Panics are only caught when
/// the crate is built with `panic = "unwind"`, and the process panic hook
/// still runs before recovery.
pub fn recover<F, T, E>(cb: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<Error>,
{
    match panic::catch_unwind(AssertUnwindSafe(cb)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            debug!(%message, "recovered panic");
            Err(Error::panic(message).into())
        }
    }
}

/// Describe a panic payload as produced by `panic!`
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        NON_STRING_PANIC_PAYLOAD.to_string()
    }
}
