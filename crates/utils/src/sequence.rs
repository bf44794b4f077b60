//! Running fallible operations in sequence

use tracing::trace;

/// A boxed operation that takes no arguments and only reports failure
pub type ErrorResultFn<'a, E> = Box<dyn FnOnce() -> Result<(), E> + 'a>;

/// Run `operations` in order and return the first error.
///
/// Operations after a failing one are never invoked. An empty sequence, or
/// one where every operation succeeds, returns `Ok(())`.
pub fn errors<I, F, E>(operations: I) -> Result<(), E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), E>,
{
    for (index, operation) in operations.into_iter().enumerate() {
        if let Err(error) = operation() {
            trace!(index, "operation failed, skipping the rest");
            return Err(error);
        }
    }
    Ok(())
}

/// Adapt an operation returning `Result<T, E>` into one that drops the `T`.
///
/// Useful for feeding value-returning operations to [`errors`].
pub fn discard_value<F, T, E>(operation: F) -> impl FnOnce() -> Result<(), E>
where
    F: FnOnce() -> Result<T, E>,
{
    move || operation().map(drop)
}

/// Run each operation in order, stopping at the first error.
///
/// The operations may be closures of different types and may return any
/// success value; only the error type has to agree. Evaluates to
/// `Result<(), E>`.
///
/// ```
/// use with_utils::errors;
///
/// let mut log = Vec::new();
/// let result: Result<(), String> = errors!(
///     || { log.push("one"); Ok::<_, String>(1) },
///     || Err::<(), _>("KABOOM".to_string()),
///     || -> Result<(), String> { panic!("never reached") },
/// );
/// assert_eq!(result, Err("KABOOM".to_string()));
/// assert_eq!(log, ["one"]);
/// ```
#[macro_export]
macro_rules! errors {
    () => {
        ::core::result::Result::Ok(())
    };
    ($($operation:expr),+ $(,)?) => {
        'errors: {
            $(
                if let ::core::result::Result::Err(error) = ($operation)() {
                    break 'errors ::core::result::Result::Err(error);
                }
            )+
            ::core::result::Result::Ok(())
        }
    };
}
