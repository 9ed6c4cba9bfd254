//! Result factories.
//!
//! Each factory wraps a raw value into a [`Producer`]: a shared closure the
//! dispatcher invokes with the actual call arguments when a rule matches.
//! The factory producers ignore those arguments.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::arg::Arg;
use crate::deferred::Deferred;

/// Which factory created a producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProducerKind {
    /// Synchronous return value
    Return,
    /// Fulfilled deferred handle
    Resolve,
    /// Rejected deferred handle
    Reject,
    /// Caller-supplied closure
    Implementation,
}

impl fmt::Display for ProducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return => write!(f, "return"),
            Self::Resolve => write!(f, "resolve"),
            Self::Reject => write!(f, "reject"),
            Self::Implementation => write!(f, "implementation"),
        }
    }
}

/// Produces the result of a matched call.
pub struct Producer<R> {
    kind: ProducerKind,
    func: Rc<dyn Fn(&[Arg]) -> R>,
}

impl<R> Producer<R> {
    pub fn kind(&self) -> ProducerKind {
        self.kind
    }

    /// Compute the result for an invocation.
    pub fn produce(&self, args: &[Arg]) -> R {
        (self.func)(args)
    }
}

// Manual impl: cloning shares the closure and must not require `R: Clone`.
impl<R> Clone for Producer<R> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            func: Rc::clone(&self.func),
        }
    }
}

impl<R> fmt::Debug for Producer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("kind", &self.kind)
            .field("func", &"<function>")
            .finish()
    }
}

/// Producer that returns `value` on every call.
pub fn just_return<R>(value: R) -> Producer<R>
where
    R: Clone + 'static,
{
    Producer {
        kind: ProducerKind::Return,
        func: Rc::new(move |_: &[Arg]| value.clone()),
    }
}

/// Producer that returns a handle already fulfilled with `value`.
pub fn promisify_result<T, E>(value: T) -> Producer<Deferred<T, E>>
where
    T: Clone + 'static,
    E: 'static,
{
    Producer {
        kind: ProducerKind::Resolve,
        func: Rc::new(move |_: &[Arg]| Deferred::resolved(value.clone())),
    }
}

/// Producer that returns a handle already rejected with `reason`.
pub fn rejectify_result<T, E>(reason: E) -> Producer<Deferred<T, E>>
where
    T: 'static,
    E: Clone + 'static,
{
    Producer {
        kind: ProducerKind::Reject,
        func: Rc::new(move |_: &[Arg]| Deferred::rejected(reason.clone())),
    }
}

/// Producer backed by a caller-supplied closure over the call arguments.
pub fn from_fn<R, F>(f: F) -> Producer<R>
where
    F: Fn(&[Arg]) -> R + 'static,
{
    Producer {
        kind: ProducerKind::Implementation,
        func: Rc::new(f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_just_return_ignores_args() {
        let producer = just_return(42u32);
        assert_eq!(producer.kind(), ProducerKind::Return);
        assert_eq!(producer.produce(&args!["a"]), 42);
        assert_eq!(producer.produce(&[]), 42);
    }

    #[test]
    fn test_promisify_result() {
        let producer = promisify_result::<_, Arg>("done");
        let handle = producer.produce(&[]);
        assert_eq!(handle.into_result(), Ok("done"));
    }

    #[test]
    fn test_rejectify_result_keeps_reference() {
        let reason = Arg::object("boom");
        let producer = rejectify_result::<u8, _>(reason.clone());
        assert_eq!(producer.kind(), ProducerKind::Reject);

        let handle = producer.produce(&[]);
        assert_eq!(handle.into_result(), Err(reason));
    }

    #[test]
    fn test_from_fn_sees_args() {
        let producer = from_fn(|args: &[Arg]| args.len());
        assert_eq!(producer.kind(), ProducerKind::Implementation);
        assert_eq!(producer.produce(&args![1, 2, 3]), 3);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ProducerKind::Implementation).unwrap();
        assert_eq!(json, "\"implementation\"");
    }
}
