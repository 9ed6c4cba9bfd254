//! Property tests for rule matching and consumption.

use mock_when::{when, Arg, MockFn};
use proptest::prelude::*;

/// Reference model of an argument, compared independently of `Arg`.
#[derive(Debug, Clone)]
enum Model {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(i64),
    Str(char),
}

impl Model {
    fn to_arg(&self) -> Arg {
        match self {
            Model::Undefined => Arg::Undefined,
            Model::Null => Arg::Null,
            Model::Bool(b) => Arg::Bool(*b),
            Model::Int(n) => Arg::Int(*n),
            Model::Float(n) => Arg::Float(*n as f64),
            Model::Str(c) => Arg::from(c.to_string()),
        }
    }

    fn number(&self) -> Option<i64> {
        match self {
            Model::Int(n) | Model::Float(n) => Some(*n),
            _ => None,
        }
    }

    fn same(&self, other: &Model) -> bool {
        match (self, other) {
            (Model::Undefined, Model::Undefined) | (Model::Null, Model::Null) => true,
            (Model::Bool(a), Model::Bool(b)) => a == b,
            (Model::Str(a), Model::Str(b)) => a == b,
            _ => match (self.number(), other.number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

fn arb_model() -> impl Strategy<Value = Model> {
    // Small domains so matches and near-misses both show up
    prop_oneof![
        Just(Model::Undefined),
        Just(Model::Null),
        any::<bool>().prop_map(Model::Bool),
        (0i64..3).prop_map(Model::Int),
        (0i64..3).prop_map(Model::Float),
        prop::sample::select(vec!['a', 'b']).prop_map(Model::Str),
    ]
}

fn arb_tuple() -> impl Strategy<Value = Vec<Model>> {
    prop::collection::vec(arb_model(), 0..4)
}

fn to_args(models: &[Model]) -> Vec<Arg> {
    models.iter().map(Model::to_arg).collect()
}

/// Expected positions compared against the invocation, missing ones as undefined.
fn prefix_matches(expected: &[Model], invocation: &[Model]) -> bool {
    expected
        .iter()
        .enumerate()
        .all(|(idx, e)| e.same(invocation.get(idx).unwrap_or(&Model::Undefined)))
}

proptest! {
    #[test]
    fn prop_answer_iff_prefix_matches(expected in arb_tuple(), invocation in arb_tuple()) {
        let mock: MockFn<u32> = MockFn::new();
        when(&mock).called_with(to_args(&expected)).mock_return_value(7);

        let answer = mock.call(to_args(&invocation));
        if prefix_matches(&expected, &invocation) {
            prop_assert_eq!(answer, Some(7));
        } else {
            prop_assert_eq!(answer, None);
        }
    }

    #[test]
    fn prop_registered_tuple_always_matches_itself(expected in arb_tuple(), extra in arb_tuple()) {
        let mock: MockFn<u32> = MockFn::new();
        when(&mock).called_with(to_args(&expected)).mock_return_value(1);

        let mut invocation = expected.clone();
        invocation.extend(extra);
        prop_assert_eq!(mock.call(to_args(&invocation)), Some(1));
    }

    #[test]
    fn prop_once_answers_exactly_once(expected in arb_tuple(), calls in 2usize..6) {
        let mock: MockFn<u32> = MockFn::new();
        when(&mock).called_with(to_args(&expected)).mock_return_value_once(3);

        prop_assert_eq!(mock.call(to_args(&expected)), Some(3));
        for _ in 1..calls {
            prop_assert_eq!(mock.call(to_args(&expected)), None);
        }
    }

    #[test]
    fn prop_once_then_durable(expected in arb_tuple(), calls in 2usize..6) {
        let mock: MockFn<u32> = MockFn::new();
        let stub = when(&mock);
        stub.called_with(to_args(&expected)).mock_return_value_once(1);
        stub.called_with(to_args(&expected)).mock_return_value(2);

        prop_assert_eq!(mock.call(to_args(&expected)), Some(1));
        for _ in 1..calls {
            prop_assert_eq!(mock.call(to_args(&expected)), Some(2));
        }
    }
}
