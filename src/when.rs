//! Registration builder.
//!
//! `when(&mock).called_with(args)` binds an argument tuple to the mock's
//! dispatcher; the configuration method then appends one rule:
//!
//! | method                        | producer           | single-use |
//! |-------------------------------|--------------------|------------|
//! | `mock_return_value`           | `just_return`      | no         |
//! | `mock_return_value_once`      | `just_return`      | yes        |
//! | `mock_resolved_value`         | `promisify_result` | no         |
//! | `mock_resolved_value_once`    | `promisify_result` | yes        |
//! | `mock_rejected_value`         | `rejectify_result` | no         |
//! | `mock_rejected_value_once`    | `rejectify_result` | yes        |
//! | `mock_implementation`         | `from_fn`          | no         |
//! | `mock_implementation_once`    | `from_fn`          | yes        |
//!
//! The resolved/rejected methods exist only for mocks returning
//! [`Deferred`].

use std::rc::Rc;

use crate::arg::{Arg, IntoArgs};
use crate::deferred::Deferred;
use crate::dispatcher::Dispatcher;
use crate::error::StubError;
use crate::mock::MockCallable;
use crate::producer::{from_fn, just_return, promisify_result, rejectify_result, Producer};
use crate::rule::RuleSummary;

/// Wrap `mock` with a fresh rule dispatcher.
///
/// Wrapping the same mock again replaces the previous dispatcher and all of
/// its rules.
pub fn when<R, M>(mock: &M) -> When<R>
where
    R: 'static,
    M: MockCallable<R> + ?Sized,
{
    When {
        dispatcher: Dispatcher::install(mock),
    }
}

/// Handle to the dispatcher installed on a mock.
#[derive(Debug)]
pub struct When<R> {
    dispatcher: Rc<Dispatcher<R>>,
}

impl<R> When<R> {
    /// Start a rule for calls whose leading arguments equal `args`.
    pub fn called_with(&self, args: impl IntoArgs) -> ReturnValueConfig<'_, R> {
        ReturnValueConfig {
            args: args.into_args(),
            dispatcher: &self.dispatcher,
        }
    }

    /// Remove every rule; subsequent calls return `None`.
    pub fn reset(&self) {
        self.dispatcher.clear();
    }

    /// Live rules in dispatch order.
    pub fn rules(&self) -> Vec<RuleSummary> {
        self.dispatcher.summaries()
    }

    /// Check that every remaining rule answered at least one call.
    ///
    /// Consumed single-use rules are already gone and never reported.
    pub fn verify_all_called(&self) -> Result<(), StubError> {
        let uncalled: Vec<RuleSummary> = self
            .dispatcher
            .summaries()
            .into_iter()
            .filter(|rule| rule.hits == 0)
            .collect();

        if uncalled.is_empty() {
            Ok(())
        } else {
            Err(StubError::UncalledRules { rules: uncalled })
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }
}

/// Pending rule for one argument tuple.
#[must_use = "a rule is only registered once a mock_* method is called"]
pub struct ReturnValueConfig<'w, R> {
    args: Vec<Arg>,
    dispatcher: &'w Dispatcher<R>,
}

impl<R> ReturnValueConfig<'_, R> {
    fn register(self, producer: Producer<R>, once: bool) {
        self.dispatcher.add_rule(self.args, producer, once);
    }

    /// Answer matching calls with `f(args)`.
    pub fn mock_implementation<F>(self, f: F)
    where
        F: Fn(&[Arg]) -> R + 'static,
    {
        self.register(from_fn(f), false);
    }

    /// Answer the next matching call with `f(args)`.
    pub fn mock_implementation_once<F>(self, f: F)
    where
        F: Fn(&[Arg]) -> R + 'static,
    {
        self.register(from_fn(f), true);
    }
}

impl<R: Clone + 'static> ReturnValueConfig<'_, R> {
    pub fn mock_return_value(self, value: R) {
        self.register(just_return(value), false);
    }

    pub fn mock_return_value_once(self, value: R) {
        self.register(just_return(value), true);
    }
}

impl<T, E> ReturnValueConfig<'_, Deferred<T, E>>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    pub fn mock_resolved_value(self, value: T) {
        self.register(promisify_result(value), false);
    }

    pub fn mock_resolved_value_once(self, value: T) {
        self.register(promisify_result(value), true);
    }

    pub fn mock_rejected_value(self, reason: E) {
        self.register(rejectify_result(reason), false);
    }

    pub fn mock_rejected_value_once(self, reason: E) {
        self.register(rejectify_result(reason), true);
    }
}
