//! Rule dispatcher.
//!
//! Owns the ordered rules for one mock callable and serves as its installed
//! implementation. Every invocation scans the rules in registration order,
//! answers with the first match, and drops that rule if it is single-use.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::arg::{display_args, Arg};
use crate::mock::MockCallable;
use crate::producer::Producer;
use crate::rule::{RuleExtras, RuleRecord, RuleSummary};

/// Per-callable rule table.
pub struct Dispatcher<R> {
    rules: RefCell<Vec<RuleRecord<R>>>,
}

impl<R: 'static> Dispatcher<R> {
    /// Create a dispatcher and install it as `mock`'s implementation.
    ///
    /// Any implementation previously installed on `mock`, including another
    /// dispatcher, stops receiving calls.
    pub fn install<M>(mock: &M) -> Rc<Self>
    where
        M: MockCallable<R> + ?Sized,
    {
        let dispatcher = Rc::new(Self::new());
        let active = Rc::clone(&dispatcher);
        mock.set_implementation(Rc::new(move |args: &[Arg]| active.dispatch(args)));
        tracing::debug!("installed rule dispatcher");
        dispatcher
    }
}

impl<R> Dispatcher<R> {
    /// Create a detached dispatcher. Use [`Dispatcher::install`] to wire it
    /// to a mock.
    pub fn new() -> Self {
        Self {
            rules: RefCell::new(Vec::new()),
        }
    }

    /// Append a rule. Rules with identical arguments may coexist; the
    /// earliest one answers first.
    pub fn add_rule(&self, args: Vec<Arg>, producer: Producer<R>, consume_after_use: bool) {
        tracing::debug!(
            args = %display_args(&args),
            kind = %producer.kind(),
            once = consume_after_use,
            "registering rule"
        );
        let record = RuleRecord::with_extras(args, producer, RuleExtras { consume_after_use });
        self.rules.borrow_mut().push(record);
    }

    /// Answer an invocation.
    ///
    /// Returns `None` when no rule matches; an unmatched call is never an
    /// error. A matched single-use rule is removed by position, so an
    /// identical rule registered after it answers the next call.
    pub fn dispatch(&self, args: &[Arg]) -> Option<R> {
        let producer = {
            let mut rules = self.rules.borrow_mut();
            let Some(index) = rules.iter().position(|rule| rule.matches(args)) else {
                tracing::trace!(args = %display_args(args), "no matching rule");
                return None;
            };

            let rule = &rules[index];
            rule.record_hit();
            tracing::trace!(
                args = %display_args(args),
                index,
                kind = %rule.producer().kind(),
                "rule matched"
            );

            if rule.extras().consume_after_use {
                let consumed = rules.remove(index);
                tracing::debug!(args = %consumed.describe_args(), index, "consumed single-use rule");
                consumed.producer().clone()
            } else {
                rule.producer().clone()
            }
        };

        // The table is released here, so a producer may re-enter the mock.
        Some(producer.produce(args))
    }

    /// Number of live rules.
    pub fn len(&self) -> usize {
        self.rules.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.borrow().is_empty()
    }

    /// Drop every rule. The dispatcher stays installed.
    pub fn clear(&self) {
        let mut rules = self.rules.borrow_mut();
        tracing::debug!(dropped = rules.len(), "clearing rules");
        rules.clear();
    }

    /// Snapshot of the live rules in dispatch order.
    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.rules.borrow().iter().map(RuleRecord::summary).collect()
    }
}

impl<R> Default for Dispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rules", &self.summaries())
            .finish()
    }
}
