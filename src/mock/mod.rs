//! Mock Callable Interface
//!
//! The stubbing engine does not create test doubles itself. It drives any
//! callable that lets a custom implementation be installed and that forwards
//! its invocations to it.
//!
//! # Contract
//!
//! - `set_implementation`: replace the active implementation
//! - `invoke`: call with a positional argument list; `None` means no
//!   behavior was configured for the call
//!
//! [`MockFn`] is a minimal callable satisfying the contract, suitable for
//! in-process unit tests.

mod function;

use std::rc::Rc;

use crate::arg::Arg;

pub use function::MockFn;

/// An installed mock implementation.
pub type Implementation<R> = Rc<dyn Fn(&[Arg]) -> Option<R>>;

/// A callable whose behavior can be overridden.
pub trait MockCallable<R> {
    /// Install `implementation`, replacing whatever was active.
    fn set_implementation(&self, implementation: Implementation<R>);

    /// Invoke the callable.
    fn invoke(&self, args: &[Arg]) -> Option<R>;
}

impl<R, M: MockCallable<R> + ?Sized> MockCallable<R> for &M {
    fn set_implementation(&self, implementation: Implementation<R>) {
        (**self).set_implementation(implementation)
    }

    fn invoke(&self, args: &[Arg]) -> Option<R> {
        (**self).invoke(args)
    }
}
