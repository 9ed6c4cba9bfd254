//! Settled deferred-computation handles.
//!
//! Stubbed async callables return a [`Deferred`], a promise-like value that
//! is fulfilled or rejected at creation time. It can be inspected directly
//! or `.await`ed, which yields the settled `Result` immediately.

use std::future::{self, IntoFuture, Ready};

use crate::arg::Arg;

/// An already-settled deferred value.
///
/// The failure payload defaults to [`Arg`] so any argument-like value can be
/// used as a rejection reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Deferred<T, E = Arg> {
    outcome: Result<T, E>,
}

impl<T, E> Deferred<T, E> {
    /// Create a handle fulfilled with `value`.
    pub fn resolved(value: T) -> Self {
        Self { outcome: Ok(value) }
    }

    /// Create a handle rejected with `reason`.
    pub fn rejected(reason: E) -> Self {
        Self { outcome: Err(reason) }
    }

    pub fn is_fulfilled(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_rejected(&self) -> bool {
        self.outcome.is_err()
    }

    /// Borrow the settled outcome.
    pub fn as_result(&self) -> Result<&T, &E> {
        self.outcome.as_ref()
    }

    pub fn into_result(self) -> Result<T, E> {
        self.outcome
    }
}

impl<T, E> From<Result<T, E>> for Deferred<T, E> {
    fn from(outcome: Result<T, E>) -> Self {
        Self { outcome }
    }
}

impl<T, E> IntoFuture for Deferred<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = Ready<Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        future::ready(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_resolved_awaits_to_value() {
        let handle: Deferred<u32> = Deferred::resolved(7);
        assert!(handle.is_fulfilled());
        assert_eq!(block_on(async { handle.await }), Ok(7));
    }

    #[test]
    fn test_rejected_awaits_to_reason() {
        let handle: Deferred<u32, &str> = Deferred::rejected("boom");
        assert!(handle.is_rejected());
        assert_eq!(handle.as_result(), Err(&"boom"));
        assert_eq!(block_on(handle.into_future()), Err("boom"));
    }

    #[test]
    fn test_from_result() {
        let handle = Deferred::<_, String>::from(Ok::<_, String>(1));
        assert_eq!(handle.into_result(), Ok(1));
    }
}
