//! Error types.
//!
//! Dispatching never fails; these errors only come out of explicit checks
//! requested by the test author.

use thiserror::Error;

use crate::rule::RuleSummary;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StubError {
    /// Some registered rules never answered a call.
    #[error("{} stubbed call(s) never happened: {}", .rules.len(), render(.rules))]
    UncalledRules { rules: Vec<RuleSummary> },
}

fn render(rules: &[RuleSummary]) -> String {
    rules.iter().map(|r| r.to_string()).collect::<Vec<_>>().join("; ")
}
