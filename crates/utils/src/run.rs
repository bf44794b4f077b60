//! Plain invocation

/// Call `f` and return its value.
///
/// Gives a closure the same calling shape as the other scoped helpers, e.g.
/// to compute a value in its own block of statements.
pub fn run<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
