//! mock-when - argument-aware stubbing for mock callables
//!
//! Register "when called with these exact arguments, produce this result"
//! rules on a mock function. Each invocation of the mock is answered by the
//! first matching rule; single-use rules are dropped after one answer and
//! unmatched calls return `None`.
//!
//! ```
//! use mock_when::{when, MockFn};
//!
//! let lookup: MockFn<u32> = MockFn::new();
//! when(&lookup).called_with(("foo",)).mock_return_value(1);
//!
//! assert_eq!(lookup.call(("foo",)), Some(1));
//! assert_eq!(lookup.call(("bar",)), None);
//! ```
//!
//! Arguments match positionally with strict equality: primitives by value,
//! objects (see [`Arg::object`]) by reference.

pub mod arg;
pub mod deferred;
pub mod dispatcher;
pub mod error;
pub mod mock;
pub mod producer;
pub mod rule;
pub mod when;

pub use arg::{Arg, ArgRef, IntoArgs};
pub use deferred::Deferred;
pub use dispatcher::Dispatcher;
pub use error::StubError;
pub use mock::{Implementation, MockCallable, MockFn};
pub use producer::{from_fn, just_return, promisify_result, rejectify_result, Producer, ProducerKind};
pub use rule::{RuleExtras, RuleRecord, RuleSummary};
pub use when::{when, ReturnValueConfig, When};
