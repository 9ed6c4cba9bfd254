//! Rule records.
//!
//! A rule pairs an expected argument tuple with a producer. Matching is
//! positional and strict, and only examines the positions the rule declares.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::arg::{display_args, Arg};
use crate::producer::{Producer, ProducerKind};

/// Extra per-rule settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleExtras {
    /// Remove the rule after it serves one call.
    pub consume_after_use: bool,
}

impl RuleExtras {
    pub fn once() -> Self {
        Self {
            consume_after_use: true,
        }
    }
}

/// Serializable snapshot of a rule, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    /// Expected arguments, rendered as literals
    pub args: Vec<String>,
    pub kind: ProducerKind,
    pub once: bool,
    /// Calls served so far
    pub hits: u32,
}

impl std::fmt::Display for RuleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) -> {}", self.args.join(", "), self.kind)?;
        if self.once {
            write!(f, " [once]")?;
        }
        Ok(())
    }
}

/// One registered stub.
#[derive(Debug)]
pub struct RuleRecord<R> {
    args: Vec<Arg>,
    producer: Producer<R>,
    extras: RuleExtras,
    hits: Cell<u32>,
}

impl<R> RuleRecord<R> {
    pub fn new(args: Vec<Arg>, producer: Producer<R>) -> Self {
        Self::with_extras(args, producer, RuleExtras::default())
    }

    pub fn with_extras(args: Vec<Arg>, producer: Producer<R>, extras: RuleExtras) -> Self {
        Self {
            args,
            producer,
            extras,
            hits: Cell::new(0),
        }
    }

    /// True if every stored position strictly equals the invocation's
    /// argument at that position. Missing invocation positions compare as
    /// [`Arg::Undefined`]; extra invocation positions are ignored.
    pub fn matches(&self, invocation: &[Arg]) -> bool {
        self.args.iter().enumerate().all(|(idx, expected)| match invocation.get(idx) {
            Some(actual) => expected.strict_eq(actual),
            None => expected.is_undefined(),
        })
    }

    pub fn producer(&self) -> &Producer<R> {
        &self.producer
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn extras(&self) -> RuleExtras {
        self.extras
    }

    pub fn hits(&self) -> u32 {
        self.hits.get()
    }

    pub(crate) fn record_hit(&self) {
        self.hits.set(self.hits.get().saturating_add(1));
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            args: self.args.iter().map(|a| a.to_string()).collect(),
            kind: self.producer.kind(),
            once: self.extras.consume_after_use,
            hits: self.hits(),
        }
    }

    /// Expected arguments formatted as `(a, b)`.
    pub fn describe_args(&self) -> String {
        display_args(&self.args)
    }
}
