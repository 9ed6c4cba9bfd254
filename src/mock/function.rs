//! Reference mock callable.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::arg::{Arg, IntoArgs};

use super::{Implementation, MockCallable};

/// A mock function returning `R`.
///
/// Clones share one implementation slot, so a clone handed to the code under
/// test observes stubs registered through any other clone.
pub struct MockFn<R> {
    implementation: Rc<RefCell<Option<Implementation<R>>>>,
}

impl<R> MockFn<R> {
    /// Create a mock with no implementation; every call returns `None`.
    pub fn new() -> Self {
        Self {
            implementation: Rc::new(RefCell::new(None)),
        }
    }

    /// Call the mock with anything convertible into an argument list.
    pub fn call(&self, args: impl IntoArgs) -> Option<R> {
        self.invoke(&args.into_args())
    }

    pub fn has_implementation(&self) -> bool {
        self.implementation.borrow().is_some()
    }
}

impl<R> Default for MockFn<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for MockFn<R> {
    fn clone(&self) -> Self {
        Self {
            implementation: Rc::clone(&self.implementation),
        }
    }
}

impl<R> fmt::Debug for MockFn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockFn")
            .field("has_implementation", &self.has_implementation())
            .finish()
    }
}

impl<R> MockCallable<R> for MockFn<R> {
    fn set_implementation(&self, implementation: Implementation<R>) {
        let previous = self.implementation.borrow_mut().replace(implementation);
        if previous.is_some() {
            tracing::debug!("replacing active mock implementation");
        }
    }

    fn invoke(&self, args: &[Arg]) -> Option<R> {
        // Release the slot before running so the implementation may call
        // back into this mock.
        let implementation = self.implementation.borrow().clone();
        match implementation {
            Some(f) => f(args),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_mock_returns_none() {
        let mock: MockFn<u32> = MockFn::new();
        assert!(!mock.has_implementation());
        assert_eq!(mock.call(("foo",)), None);
    }

    #[test]
    fn test_implementation_receives_args() {
        let mock: MockFn<usize> = MockFn::new();
        mock.set_implementation(Rc::new(|args: &[Arg]| Some(args.len())));
        assert_eq!(mock.call((1, 2)), Some(2));
    }

    #[test]
    fn test_clones_share_implementation() {
        let mock: MockFn<&'static str> = MockFn::new();
        let handle = mock.clone();
        mock.set_implementation(Rc::new(|_: &[Arg]| Some("stubbed")));
        assert!(handle.has_implementation());
        assert_eq!(handle.call(()), Some("stubbed"));
    }

    #[test]
    fn test_set_implementation_replaces() {
        let mock: MockFn<u8> = MockFn::new();
        mock.set_implementation(Rc::new(|_: &[Arg]| Some(1)));
        mock.set_implementation(Rc::new(|_: &[Arg]| Some(2)));
        assert_eq!(mock.call(()), Some(2));
    }

    #[test]
    fn test_reentrant_call() {
        let mock: MockFn<u32> = MockFn::new();
        let inner = mock.clone();
        mock.set_implementation(Rc::new(move |args: &[Arg]| {
            if args.is_empty() {
                Some(0)
            } else {
                inner.call(()).map(|v| v + 1)
            }
        }));
        assert_eq!(mock.call(("again",)), Some(1));
    }
}
