//! Property tests: equality implies hash equality, and the representation
//! of any instance reconstructs an equal instance.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use sigrec_synth::{ParamKind, Parameter, RecordType, Signature, Value};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Generate a hashable scalar value.
///
/// Floats come from scaled integers so their text representation is exact
/// and reconstruction round-trips bit-for-bit.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Unit),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1_000_000i64..1_000_000).prop_map(|n| Value::Float(n as f64 / 64.0)),
        "[ -~]{0,12}".prop_map(Value::Str),
    ]
}

/// Generate a hashable value: a scalar or a flat tuple of scalars.
fn arb_hashable() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_scalar(),
        prop::collection::vec(arb_scalar(), 0..4).prop_map(Value::Tuple),
    ]
}

/// Extra keyword names that can never collide with a declared parameter.
fn arb_extra_kwargs() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("x[a-z0-9_]{0,6}", arb_scalar(), 0..3)
}

/// A type with every parameter kind, for the round-trip property.
fn every_kind_type() -> Arc<RecordType> {
    let sig = Signature::new(vec![
        Parameter::new("pos", ParamKind::PositionalOnly),
        Parameter::new("pos_kw", ParamKind::PositionalOrKeyword),
        Parameter::new("args", ParamKind::VarPositional),
        Parameter::new("kw", ParamKind::KeywordOnly),
        Parameter::new("kwargs", ParamKind::VarKeyword),
    ])
    .unwrap();
    RecordType::synthesize("EveryKind", sig).unwrap()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Two instances built from the same values compare equal and hash
    /// equal.
    #[test]
    fn equal_records_hash_equal(values in prop::collection::vec(arb_hashable(), 0..5)) {
        let params = (0..values.len())
            .map(|i| Parameter::new(format!("p{}", i), ParamKind::PositionalOrKeyword))
            .collect();
        let ty = RecordType::synthesize("Sample", Signature::new(params).unwrap()).unwrap();

        let a = ty.construct(values.clone(), vec![]).unwrap();
        let b = ty.construct(values, vec![]).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.try_hash().unwrap(), b.try_hash().unwrap());
    }

    /// Evaluating the representation reconstructs an equal instance, for
    /// every parameter kind including populated collectors.
    #[test]
    fn representation_reconstructs_equal_instance(
        pos in arb_scalar(),
        pos_kw in arb_scalar(),
        extra_args in prop::collection::vec(arb_scalar(), 0..3),
        kw_value in arb_scalar(),
        extra_kwargs in arb_extra_kwargs(),
    ) {
        let ty = every_kind_type();

        let mut args = vec![pos, pos_kw];
        args.extend(extra_args);
        let mut kwargs = vec![("kw".to_string(), kw_value)];
        kwargs.extend(extra_kwargs);

        let original = ty.construct(args, kwargs).unwrap();
        let rebuilt = ty.reconstruct(&original.to_string()).unwrap();

        prop_assert_eq!(original, rebuilt);
    }

    /// A value literal re-parses to an equal value.
    #[test]
    fn value_repr_reparses(value in arb_hashable()) {
        let parsed = sigrec_synth::parse_value(&value.repr()).unwrap();
        prop_assert_eq!(parsed, value);
    }

    /// Mutation attempts never change the record.
    #[test]
    fn failed_mutation_preserves_values(x in arb_scalar(), y in arb_scalar()) {
        let sig = Signature::new(vec![
            Parameter::new("x", ParamKind::PositionalOrKeyword),
            Parameter::new("y", ParamKind::PositionalOrKeyword),
        ])
        .unwrap();
        let ty = RecordType::synthesize("Pair", sig).unwrap();
        let ins = ty.construct(vec![x.clone(), y.clone()], vec![]).unwrap();

        prop_assert!(ins.set("x", Value::Unit).is_err());
        prop_assert!(ins.delete("y").is_err());
        prop_assert_eq!(ins.get("x"), Some(&x));
        prop_assert_eq!(ins.get("y"), Some(&y));
    }
}
